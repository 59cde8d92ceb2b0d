//! crates/cli/src/demo.rs
//! Simulated host loop used by `switchlog demo`.
//!
//! Two components, `net_client` and `ui_overlay`, log through one shared
//! [`DebugTools`] every frame. Output follows whatever the settings file says,
//! so with fresh settings (force-off on) only the ungated dump is printed.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use logging::{
    ComponentLogger, DebugTools, DebugToolsConfig, PacingMode, SettingsFile, WriterSink,
    debug_log, describe, paced_log,
};

use crate::CliError;

/// Components registered by the demo.
pub(crate) const NET_COMPONENT: &str = "net_client";
pub(crate) const UI_COMPONENT: &str = "ui_overlay";

#[derive(Clone, Copy, Debug)]
pub(crate) struct DemoOptions {
    pub(crate) frames: u64,
    pub(crate) frame_ms: u64,
    pub(crate) per_category: bool,
}

struct Link {
    frame: u64,
    peer: Option<String>,
    rtt_ms: f64,
    state: char,
}

describe!(Link {
    frame,
    peer,
    rtt_ms,
    state,
});

fn poll_network(net: &ComponentLogger, link: &mut Link) {
    link.rtt_ms = 12.5 + (link.frame % 5) as f64;
    debug_log!(net, "Frames", "frame {} rtt {:.1}ms", link.frame, link.rtt_ms);

    if net.null_check(link.peer.as_deref(), "peer", false) {
        paced_log!(net, "Sockets", "peer {} alive", link.peer.as_deref().unwrap_or_default());
    }
}

fn layout_overlay(ui: &ComponentLogger, frame: u64) {
    paced_log!(ui, "Layout", delay = Duration::from_millis(500); "layout pass at frame {frame}");
}

/// Runs the loop, streaming sink output to `stdout` after every frame.
pub(crate) fn run_demo<W: Write>(
    config: &Path,
    options: DemoOptions,
    stdout: &mut W,
) -> Result<(), CliError> {
    let pacing = if options.per_category {
        PacingMode::PerCategory
    } else {
        PacingMode::Shared
    };
    let sink = Arc::new(WriterSink::new(Vec::<u8>::new()).with_source("demo"));
    let tools = Arc::new(DebugTools::with_config(
        SettingsFile::open(config)?,
        sink.clone(),
        DebugToolsConfig::default().with_pacing(pacing),
    ));
    let net = tools.register(NET_COMPONENT);
    let ui = tools.register(UI_COMPONENT);

    tracing::debug!(
        target: "switchlog",
        frames = options.frames,
        frame_ms = options.frame_ms,
        ?pacing,
        "demo started"
    );

    let mut link = Link {
        frame: 0,
        peer: Some("10.0.0.7".to_owned()),
        rtt_ms: 0.0,
        state: 'U',
    };
    let delta = Duration::from_millis(options.frame_ms);
    let disconnect_at = options.frames / 2;

    for frame in 0..options.frames {
        link.frame = frame;
        if frame == disconnect_at && frame > 0 {
            link.peer = None;
            link.state = 'D';
        }

        poll_network(&net, &mut link);
        layout_overlay(&ui, frame);
        if frame == 0 {
            tools.dump_object(Some(&link), "link");
        }

        tools.tick(delta);
        let chunk = sink.with_writer(std::mem::take);
        stdout.write_all(&chunk)?;
    }

    writeln!(
        stdout,
        "# {} frames simulated, {} switches known",
        options.frames,
        tools.switch_keys().len()
    )?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::SettingsFixture;

    fn options(frames: u64) -> DemoOptions {
        DemoOptions {
            frames,
            frame_ms: 100,
            per_category: false,
        }
    }

    fn run(fixture: &SettingsFixture, options: DemoOptions) -> String {
        let mut out = Vec::new();
        run_demo(fixture.path(), options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fresh_settings_only_print_the_dump() {
        let fixture = SettingsFixture::new();
        let output = run(&fixture, options(4));

        assert!(output.contains("[Info   :demo] Debugging Link 'link':"));
        assert!(output.contains("\tchar state = 'U'"));
        assert!(output.contains("\tcore::option::Option<alloc::string::String> peer = \"10.0.0.7\""));
        assert!(!output.contains("[Frames|"));
        assert!(output.ends_with("# 4 frames simulated, 3 switches known\n"));

        let settings = fixture.read();
        assert!(settings.contains("[\"Mods.net_client\"]"));
        assert!(settings.contains("[\"Mods.ui_overlay\"]"));
    }

    #[test]
    fn developer_settings_show_gated_lines() {
        let fixture = SettingsFixture::with_contents(
            "[\"switchlog\"]\n\"Force Debug Logging Off\" = false\n\"Developer Mode\" = true\n",
        );
        let output = run(&fixture, options(10));

        let frames = output.matches("[Frames|cli::demo::poll_network]").count();
        assert_eq!(frames, 10);
        // Shared pacing: the socket line of frame 0 holds the layout line back
        // until frame 5, when the peer is already gone.
        assert_eq!(output.matches("[Sockets|").count(), 1);
        assert_eq!(output.matches("[Layout|").count(), 1);
        assert!(output.contains("[Layout|cli::demo::layout_overlay]: layout pass at frame 5"));
        assert!(output.contains("[Warning:demo] peer is null"));
    }

    #[test]
    fn per_category_pacing_lets_both_components_through() {
        let fixture = SettingsFixture::with_contents(
            "[\"switchlog\"]\n\"Force Debug Logging Off\" = false\n\"Developer Mode\" = true\n",
        );
        let output = run(
            &fixture,
            DemoOptions {
                per_category: true,
                ..options(4)
            },
        );

        assert_eq!(output.matches("[Sockets|cli::demo::poll_network]").count(), 1);
        assert_eq!(output.matches("[Layout|cli::demo::layout_overlay]").count(), 1);
    }

    #[test]
    fn unreadable_settings_fail() {
        let fixture = SettingsFixture::with_contents("not toml [");
        let mut out = Vec::new();
        let error = run_demo(fixture.path(), options(1), &mut out).unwrap_err();
        assert_eq!(error.exit_code(), crate::EXIT_SETTINGS);
    }
}
