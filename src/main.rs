use pmsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "spring_grid.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build(scenario_cfg)?;

    let parameters = scenario.parameters.clone();
    let log_every = parameters.log_every.max(1);

    for step in 1..=parameters.steps {
        scenario.simulation.update(parameters.dt);
        if step % log_every == 0 {
            log::info!(
                "step {step}/{}: kinetic energy {:.6}",
                parameters.steps,
                scenario.simulation.total_kinetic_energy()
            );
        }
    }

    for (i, point_mass) in scenario.point_masses.iter().enumerate() {
        let point_mass = point_mass.read().unwrap();
        log::info!(
            "point mass {i}: position ({:.3}, {:.3})",
            point_mass.position.x,
            point_mass.position.y
        );
    }

    Ok(())
}
