// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the scenario tests.

pub use hy_config::AppConfig;
pub use hy_core::{
    FakeClock, MemorySink, RunFlags, Severity, SubsystemKind, SubsystemState,
};
pub use hy_launch::{
    FakeProbe, LandingPipeline, LandingReport, LaunchPipeline, LaunchReport, PlanSet,
    SubsystemPlan,
};
pub use hy_registry::SubsystemRegistry;

/// Scenario 1 configuration: Logging on console level 2, one interface.
pub const TWO_SUBSYSTEMS: &str = r#"{
    "logging": { "console": { "enabled": true, "level": 2 } },
    "network": { "interfaces": [ { "name": "eth0" } ] }
}"#;

/// A full coordinator world: config, flags, registry, plans, sink.
pub struct World {
    pub config: Option<AppConfig>,
    pub flags: &'static RunFlags,
    pub registry: SubsystemRegistry<FakeClock>,
    pub plans: PlanSet,
    pub probe: FakeProbe,
    pub sink: MemorySink,
    pub clock: FakeClock,
    pub executable: Option<std::path::PathBuf>,
}

impl World {
    pub fn new(config_json: Option<&str>) -> Self {
        let clock = FakeClock::new();
        Self {
            config: config_json.map(|json| {
                AppConfig::from_json(json).expect("scenario config must parse")
            }),
            flags: Box::leak(Box::new(RunFlags::new())),
            registry: SubsystemRegistry::new(clock.clone()),
            plans: PlanSet::new(),
            probe: FakeProbe::up("eth0"),
            sink: MemorySink::new(),
            clock,
            executable: None,
        }
    }

    pub fn plan(&mut self, plan: SubsystemPlan) -> &mut Self {
        self.plans.insert(plan);
        self
    }

    pub fn launch(&self) -> LaunchReport {
        let mut pipeline = LaunchPipeline::new(
            self.config.as_ref(),
            self.flags,
            &self.registry,
            &self.plans,
            &self.probe,
            &self.sink,
            self.clock.clone(),
        );
        if let Some(exe) = &self.executable {
            pipeline = pipeline.executable(exe.clone());
        }
        pipeline.run()
    }

    pub fn land(&self) -> LandingReport {
        LandingPipeline::new(self.flags, &self.registry, &self.plans, &self.sink).run()
    }
}
