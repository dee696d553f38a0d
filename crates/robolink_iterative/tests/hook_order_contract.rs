use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;

use robolink_core::lifecycle::{Controllable, EnabledGate, Mode};
use robolink_iterative::robot::{Command, CommandSlot, HostRobot, RobotAdapter, Subsystem};

type Log = Rc<RefCell<Vec<String>>>;

struct Recorder {
    tag: &'static str,
    log: Log,
}

impl Recorder {
    fn new(tag: &'static str, log: &Log) -> Self {
        Self {
            tag,
            log: Rc::clone(log),
        }
    }

    fn hit(&self, hook: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.tag, hook));
    }
}

impl Controllable for Recorder {
    fn on_create(&mut self) {
        self.hit("create");
    }
    fn on_enabled(&mut self) {
        self.hit("enabled");
    }
    fn on_disabled(&mut self) {
        self.hit("disabled");
    }
    fn on_auto_start(&mut self) {
        self.hit("auto_start");
    }
    fn on_teleop_start(&mut self) {
        self.hit("teleop_start");
    }
    fn on_auto_end(&mut self) {
        self.hit("auto_end");
    }
    fn on_teleop_end(&mut self) {
        self.hit("teleop_end");
    }
    fn on_tick(&mut self) {
        self.hit("tick");
    }
    fn on_tick_auto(&mut self) {
        self.hit("tick_auto");
    }
    fn on_tick_teleop(&mut self) {
        self.hit("tick_teleop");
    }
    fn on_tick_disabled(&mut self) {
        self.hit("tick_disabled");
    }
}

impl Subsystem for Recorder {
    fn name(&self) -> &str {
        self.tag
    }
}

fn adapter_with(subsystem_tags: &[&'static str]) -> (RobotAdapter, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let subsystems: Vec<Box<dyn Subsystem>> = subsystem_tags
        .iter()
        .map(|tag| Box::new(Recorder::new(tag, &log)) as Box<dyn Subsystem>)
        .collect();
    let adapter =
        RobotAdapter::new("contract_robot", Box::new(Recorder::new("robot", &log)), subsystems)
            .unwrap();
    (adapter, log)
}

fn count(log: &Log, entry: &str) -> usize {
    log.borrow().iter().filter(|line| *line == entry).count()
}

#[test]
fn broadcast_is_self_first_then_registration_order() {
    let (mut adapter, log) = adapter_with(&["a", "b", "c"]);

    adapter.autonomous_init();

    assert_eq!(
        *log.borrow(),
        vec![
            "robot:enabled",
            "robot:auto_start",
            "a:auto_start",
            "b:auto_start",
            "c:auto_start",
        ]
    );
}

#[test]
fn one_end_hook_per_mode_exit_across_a_full_match() {
    let (mut adapter, log) = adapter_with(&["a"]);

    adapter.disabled_init();
    adapter.autonomous_init();
    adapter.teleop_init();
    adapter.disabled_init();

    assert_eq!(count(&log, "robot:auto_end"), 1);
    assert_eq!(count(&log, "robot:teleop_end"), 1);
    assert_eq!(count(&log, "a:auto_end"), 1);
    assert_eq!(count(&log, "a:teleop_end"), 1);
    assert_eq!(adapter.mode(), Mode::Disabled);

    // The auto end lands before any teleop hook, and the teleop end before
    // the final disabled hook.
    let entries = log.borrow();
    let auto_end = entries.iter().position(|e| e == "robot:auto_end").unwrap();
    let teleop_start = entries.iter().position(|e| e == "robot:teleop_start").unwrap();
    let teleop_end = entries.iter().position(|e| e == "robot:teleop_end").unwrap();
    let last_disabled = entries.iter().rposition(|e| e == "robot:disabled").unwrap();
    assert!(auto_end < teleop_start);
    assert!(teleop_end < last_disabled);
}

#[test]
fn entering_disabled_from_disabled_fires_no_end_hooks() {
    let (mut adapter, log) = adapter_with(&["a"]);

    adapter.disabled_init();
    adapter.disabled_init();

    assert_eq!(count(&log, "robot:auto_end"), 0);
    assert_eq!(count(&log, "robot:teleop_end"), 0);
    assert_eq!(count(&log, "robot:disabled"), 2);
}

#[test]
fn entering_disabled_from_auto_fires_auto_end_only() {
    let (mut adapter, log) = adapter_with(&[]);

    adapter.autonomous_init();
    adapter.disabled_init();

    assert_eq!(count(&log, "robot:auto_end"), 1);
    assert_eq!(count(&log, "robot:teleop_end"), 0);
}

#[test]
fn entering_disabled_from_teleop_fires_teleop_end_only() {
    let (mut adapter, log) = adapter_with(&[]);

    adapter.teleop_init();
    adapter.disabled_init();

    assert_eq!(count(&log, "robot:teleop_end"), 1);
    assert_eq!(count(&log, "robot:auto_end"), 0);
}

#[test]
fn teleop_entry_does_not_fire_the_enabled_hook() {
    let (mut adapter, log) = adapter_with(&[]);

    adapter.teleop_init();

    assert_eq!(count(&log, "robot:enabled"), 0);
    assert_eq!(count(&log, "robot:teleop_start"), 1);
}

#[test]
fn reentering_autonomous_refires_start_hooks_without_dedup() {
    let (mut adapter, log) = adapter_with(&["a"]);

    adapter.autonomous_init();
    adapter.autonomous_init();

    assert_eq!(count(&log, "robot:enabled"), 2);
    assert_eq!(count(&log, "robot:auto_start"), 2);
    assert_eq!(count(&log, "a:auto_start"), 2);
    assert_eq!(count(&log, "robot:auto_end"), 0);
}

#[test]
fn generic_tick_fires_in_every_mode() {
    let (mut adapter, log) = adapter_with(&[]);

    adapter.robot_periodic();
    adapter.autonomous_init();
    adapter.robot_periodic();
    adapter.teleop_init();
    adapter.robot_periodic();
    adapter.disabled_init();
    adapter.robot_periodic();

    assert_eq!(count(&log, "robot:tick"), 4);
}

#[test]
fn end_hooks_observe_the_gate_still_enabled() {
    // The probe's gate handle is filled in after construction, because the
    // adapter owns the gate it will report through.
    type GateSlot = Rc<RefCell<Option<Arc<EnabledGate>>>>;

    struct GateProbe {
        gate: GateSlot,
        enabled_at_auto_end: Rc<RefCell<Option<bool>>>,
    }

    impl Controllable for GateProbe {
        fn on_auto_end(&mut self) {
            let gate = self.gate.borrow();
            let gate = gate.as_ref().expect("gate handle installed");
            *self.enabled_at_auto_end.borrow_mut() = Some(gate.is_enabled());
        }
    }

    impl Subsystem for GateProbe {
        fn name(&self) -> &str {
            "gate_probe"
        }
    }

    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let gate_slot: GateSlot = Rc::new(RefCell::new(None));
    let enabled_at_auto_end = Rc::new(RefCell::new(None));
    let probe = GateProbe {
        gate: Rc::clone(&gate_slot),
        enabled_at_auto_end: Rc::clone(&enabled_at_auto_end),
    };

    let mut adapter = RobotAdapter::new(
        "contract_robot",
        Box::new(Recorder::new("robot", &log)),
        vec![Box::new(probe)],
    )
    .unwrap();
    *gate_slot.borrow_mut() = Some(adapter.enabled_gate());

    adapter.autonomous_init();
    adapter.disabled_init();

    // The end hook ran while the robot was still enabled; the gate dropped
    // only with the mode assignment.
    assert_eq!(*enabled_at_auto_end.borrow(), Some(true));
    assert!(!adapter.enabled_gate().is_enabled());
}

#[test]
fn panicking_subsystem_aborts_the_rest_of_the_broadcast() {
    struct Exploding;

    impl Controllable for Exploding {
        fn on_auto_start(&mut self) {
            panic!("boom");
        }
    }

    impl Subsystem for Exploding {
        fn name(&self) -> &str {
            "exploding"
        }
    }

    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let subsystems: Vec<Box<dyn Subsystem>> = vec![
        Box::new(Recorder::new("a", &log)),
        Box::new(Exploding),
        Box::new(Recorder::new("c", &log)),
    ];
    let mut adapter =
        RobotAdapter::new("contract_robot", Box::new(Recorder::new("robot", &log)), subsystems)
            .unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| adapter.autonomous_init()));
    assert!(result.is_err());

    // a received the broadcast, c never did.
    assert_eq!(count(&log, "a:auto_start"), 1);
    assert_eq!(count(&log, "c:auto_start"), 0);
}

struct NamedCommand(&'static str);

impl Command for NamedCommand {
    fn name(&self) -> &str {
        self.0
    }

    fn execute(&mut self) {}
}

struct WithDefault {
    log: Log,
}

impl Controllable for WithDefault {}

impl Subsystem for WithDefault {
    fn name(&self) -> &str {
        "drive"
    }

    fn default_command(&mut self) -> Option<Box<dyn Command>> {
        self.log.borrow_mut().push("drive:handed".to_string());
        Some(Box::new(NamedCommand("hold_station")))
    }
}

#[derive(Default)]
struct RecordingSlot {
    installed: Vec<(String, Option<String>)>,
}

impl CommandSlot for RecordingSlot {
    fn install(&mut self, subsystem: &str, command: Option<Box<dyn Command>>) {
        self.installed
            .push((subsystem.to_string(), command.map(|c| c.name().to_string())));
    }
}

#[test]
fn default_commands_are_handed_to_the_slot_in_order() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let subsystems: Vec<Box<dyn Subsystem>> = vec![
        Box::new(WithDefault {
            log: Rc::clone(&log),
        }),
        Box::new(Recorder::new("intake", &log)),
    ];
    let mut adapter =
        RobotAdapter::new("contract_robot", Box::new(Recorder::new("robot", &log)), subsystems)
            .unwrap();

    let mut slot = RecordingSlot::default();
    adapter.init_default_commands(&mut slot);

    assert_eq!(
        slot.installed,
        vec![
            ("drive".to_string(), Some("hold_station".to_string())),
            ("intake".to_string(), None),
        ]
    );
}
