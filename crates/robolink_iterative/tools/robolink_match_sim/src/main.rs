use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use robolink_core::lifecycle::{Controllable, EnabledGate};
use robolink_iterative::error::log_core_error;
use robolink_iterative::robot::{
    run_if_enabled, Command, CommandSlot, GatedOutput, HostRobot, OutputLike, RobotAdapter,
    Subsystem,
};
use robolink_match_sim::config::Config;
use robolink_match_sim::schedule::{drive_tick, MatchPhase, MatchSchedule};

/// Top-level demo robot: logs the coarse lifecycle milestones.
struct DemoRobot;

impl Controllable for DemoRobot {
    fn on_create(&mut self) {
        info!("robot created");
    }
    fn on_enabled(&mut self) {
        info!("robot enabled");
    }
    fn on_disabled(&mut self) {
        info!("robot disabled");
    }
    fn on_auto_start(&mut self) {
        info!("autonomous started");
    }
    fn on_auto_end(&mut self) {
        info!("autonomous ended");
    }
    fn on_teleop_start(&mut self) {
        info!("teleop started");
    }
    fn on_teleop_end(&mut self) {
        info!("teleop ended");
    }
}

/// Console-backed stand-in for an actuator channel.
struct ConsoleOutput {
    channel: &'static str,
}

impl OutputLike<f64> for ConsoleOutput {
    type Error = Infallible;

    fn write(&self, value: &f64) -> std::result::Result<(), Self::Error> {
        debug!(channel = self.channel, value, "actuator write");
        Ok(())
    }
}

/// Demo drivetrain: pushes a fixed autonomous output and goes neutral in
/// teleop. Writes pass through the enabled gate, so Disabled stays quiet
/// without the subsystem checking mode itself.
struct Drivetrain {
    output: GatedOutput<f64, ConsoleOutput>,
    auto_ticks: u64,
}

impl Controllable for Drivetrain {
    fn on_auto_start(&mut self) {
        self.auto_ticks = 0;
    }

    fn on_tick_auto(&mut self) {
        self.auto_ticks += 1;
        let _ = self.output.write(&0.4);
    }

    fn on_auto_end(&mut self) {
        info!(ticks = self.auto_ticks, "drivetrain finished autonomous");
    }

    fn on_tick_teleop(&mut self) {
        let _ = self.output.write(&0.0);
    }
}

impl Subsystem for Drivetrain {
    fn name(&self) -> &str {
        "drivetrain"
    }
}

/// Demo intake: carries a default command the host runs on enabled ticks.
struct Intake;

impl Controllable for Intake {}

impl Subsystem for Intake {
    fn name(&self) -> &str {
        "intake"
    }

    fn default_command(&mut self) -> Option<Box<dyn Command>> {
        Some(Box::new(HoldIntake { runs: 0 }))
    }
}

struct HoldIntake {
    runs: u64,
}

impl Command for HoldIntake {
    fn name(&self) -> &str {
        "hold_intake"
    }

    fn execute(&mut self) {
        self.runs += 1;
        if self.runs % 50 == 0 {
            debug!(runs = self.runs, "hold_intake still holding");
        }
    }
}

/// Host-side default-command registry: runs installed commands on enabled
/// ticks, the way a real runtime would when nothing else claims a
/// subsystem.
#[derive(Default)]
struct SimCommandSlot {
    commands: Vec<(String, Box<dyn Command>)>,
}

impl SimCommandSlot {
    fn run_all(&mut self) {
        for (_, command) in &mut self.commands {
            command.execute();
        }
    }
}

impl CommandSlot for SimCommandSlot {
    fn install(&mut self, subsystem: &str, command: Option<Box<dyn Command>>) {
        match command {
            Some(command) => {
                info!(subsystem, command = command.name(), "default command installed");
                self.commands.push((subsystem.to_string(), command));
            }
            None => info!(subsystem, "no default command"),
        }
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(err) => {
            log_core_error(&err);
            std::process::exit(2);
        }
    };

    let schedule = MatchSchedule::from_config(&config);

    // The gate is created first so subsystem helpers can hold it; the
    // adapter adopts it and keeps it in step with the mode.
    let gate = Arc::new(EnabledGate::new());
    let drivetrain = Drivetrain {
        output: GatedOutput::new(
            Arc::clone(&gate),
            Arc::new(ConsoleOutput { channel: "drive" }),
        ),
        auto_ticks: 0,
    };

    let mut adapter = RobotAdapter::with_gate(
        config.robot_name.clone(),
        Box::new(DemoRobot),
        vec![Box::new(drivetrain), Box::new(Intake)],
        Arc::clone(&gate),
    )
    .context("construct robot adapter")?;
    let mut slot = SimCommandSlot::default();
    adapter.init_default_commands(&mut slot);

    info!(
        robot = %config.robot_name,
        tick_ms = config.tick_ms,
        auto_secs = config.auto_secs,
        teleop_secs = config.teleop_secs,
        total_ticks = schedule.total_ticks(),
        "match simulator started"
    );

    adapter.robot_init();
    adapter.disabled_init();

    let mut interval = tokio::time::interval(Duration::from_millis(config.tick_ms));
    let mut phase = MatchPhase::PreMatch;
    let mut tick: u64 = 0;

    while !schedule.is_complete(tick) {
        interval.tick().await;

        let next = schedule.phase_at(tick);
        if next != phase {
            info!(phase = next.label(), mode = next.mode().label(), "phase change");
        }
        drive_tick(&mut adapter, &mut phase, next);

        run_if_enabled(&gate, || slot.run_all());

        tick += 1;
    }

    info!("match complete");
    Ok(())
}
