//! Host loop
//!
//! One frame: pick input, build a tick, update the stack once, render.

use anyhow::{Context, Result};
use cue_core::time::SimulationTime;
use cue_core::EntityStore;
use cue_render::{render, RenderSink, TraceSink};
use cue_script::ScriptRepository;
use cue_services::{InputRecording, Settings};
use cue_stage::{BehaviorRegistry, BehaviorStack, Playbook, Tick};
use tracing::{debug, info};

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub seconds: f64,
    pub draws: usize,
    /// The stack emptied before the frame limit.
    pub finished: bool,
}

pub struct Host {
    playbook: Playbook,
    input: InputRecording,
    time: SimulationTime,
    max_frames: u64,
}

impl Host {
    pub fn new(
        playbook: Playbook,
        input: InputRecording,
        tick_rate_hz: u32,
        max_frames: u64,
    ) -> Self {
        Self {
            playbook,
            input,
            time: SimulationTime::new(tick_rate_hz),
            max_frames,
        }
    }

    /// Load scripts and input named by `settings` and validate the scripts.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let scripts = ScriptRepository::load(&settings.script_path).with_context(|| {
            format!("loading scripts from {}", settings.script_path.display())
        })?;

        let playbook = Playbook::new(scripts, BehaviorRegistry::builtin(), settings.stage.clone());
        playbook.validate().context("validating scripts")?;

        let input = match &settings.input_path {
            Some(path) => InputRecording::load(path)
                .with_context(|| format!("loading input from {}", path.display()))?,
            None => InputRecording::default(),
        };
        info!(
            width = settings.window.width,
            height = settings.window.height,
            input_frames = input.len(),
            "host ready"
        );

        Ok(Self::new(
            playbook,
            input,
            settings.tick_rate_hz,
            settings.max_frames,
        ))
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_with(&mut TraceSink::new())
    }

    pub fn run_with(&mut self, sink: &mut dyn RenderSink) -> Result<RunSummary> {
        let mut store = EntityStore::new();
        store.init();

        let boot = Tick::new(&self.playbook, 0.0, self.input.frame(0));
        let mut stack = BehaviorStack::with_entry(&self.playbook, &mut store, &boot)
            .context("starting entry scenario")?;

        let mut frames = 0;
        let mut draws = 0;
        while !stack.is_empty() && frames < self.max_frames {
            let delta = self.time.advance_tick();
            let tick = Tick::new(&self.playbook, delta, self.input.frame(frames as usize));
            stack
                .update(&mut store, &tick)
                .with_context(|| format!("frame {frames}"))?;
            draws += render(&store, frames, sink);
            frames += 1;
            debug!(frame = frames, depth = stack.depth(), "frame done");
        }

        let finished = stack.is_empty();
        stack.clear(&mut store);
        Ok(RunSummary {
            frames,
            seconds: self.time.total_seconds(),
            draws,
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_render::FrameRecorder;
    use cue_services::{InputState, StageSettings};
    use serde_json::json;

    fn host(document: serde_json::Value, input: Vec<InputState>, max_frames: u64) -> Host {
        let scripts = ScriptRepository::from_value(&document).unwrap();
        let playbook =
            Playbook::new(scripts, BehaviorRegistry::builtin(), StageSettings::default());
        Host::new(playbook, InputRecording::new(input), 10, max_frames)
    }

    #[test]
    fn runs_until_stack_empties() {
        let mut host = host(
            json!({
                "init": [
                    { "make": [ { "name": "title", "pos": { "x": 0, "y": 0, "z": 0 },
                                  "text": { "text": "Cue", "font": { "size": 32 } } } ] },
                    { "push": "wait", "param": 0.5 }
                ]
            }),
            Vec::new(),
            100,
        );
        let mut recorder = FrameRecorder::default();
        let summary = host.run_with(&mut recorder).unwrap();

        // make, push wait, 5 wait ticks at 0.1s, interpreter pops
        assert_eq!(summary.frames, 8);
        assert!(summary.finished);
        assert!(recorder.draws().is_empty());
        assert!(summary.draws >= 6);
    }

    #[test]
    fn stops_at_frame_limit() {
        let mut host = host(
            json!({ "init": [ { "push": "wait", "param": 100.0 } ] }),
            Vec::new(),
            3,
        );
        let summary = host.run_with(&mut FrameRecorder::default()).unwrap();
        assert_eq!(summary.frames, 3);
        assert!(!summary.finished);
    }

    #[test]
    fn recorded_input_drives_dialogue() {
        let mut host = host(
            json!({
                "init": [
                    { "make": [ { "name": "alice", "pos": { "x": 0, "y": 0, "z": 0 } } ] },
                    { "push": "speak", "param": { "entity": "alice", "text": "Hi" } }
                ]
            }),
            vec![
                InputState::default(),
                InputState::default(),
                InputState::confirm(),
            ],
            100,
        );
        let summary = host.run_with(&mut FrameRecorder::default()).unwrap();
        assert_eq!(summary.frames, 4);
        assert!(summary.finished);
    }

    #[test]
    fn missing_entity_surfaces_as_error() {
        let mut host = host(
            json!({
                "init": [ { "push": "speak", "param": { "entity": "nobody", "text": "?" } } ]
            }),
            Vec::new(),
            10,
        );
        let err = host.run_with(&mut FrameRecorder::default()).unwrap_err();
        assert!(format!("{err:#}").contains("nobody"));
    }
}
