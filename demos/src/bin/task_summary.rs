//! Double cart-pole task bundle summary.
//!
//! Builds the aggregated environment configuration, runs the
//! construction-time checks and the advisory lints, and prints the result.
//!
//! Run: `cargo run -p dualpole-demos --bin task_summary`

use clap::Parser;

use dualpole_core::terms::TerminationFn;
use dualpole_task::lint::lint;
use dualpole_task::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Inspect the double cart-pole task bundle.
#[derive(Parser)]
#[command(name = "task_summary")]
#[command(about = "Build, check, and print the double cart-pole task bundle")]
struct Cli {
    /// Override the number of replicated environment instances.
    #[arg(long)]
    num_envs: Option<u32>,

    /// Override the spacing between environment origins, in metres.
    #[arg(long)]
    env_spacing: Option<f32>,

    /// Attach the recording camera rig to the scene.
    #[arg(long)]
    camera: bool,

    /// Dump the full bundle as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut cfg = DualPoleEnvCfg::new();
    if let Some(num_envs) = cli.num_envs {
        cfg.scene.num_envs = num_envs;
    }
    if let Some(env_spacing) = cli.env_spacing {
        cfg.scene.env_spacing = env_spacing;
    }
    if cli.camera {
        cfg.scene = cfg.scene.clone().with_recording_camera();
    }

    if let Err(e) = cfg.validate() {
        eprintln!("invalid bundle: {e}");
        std::process::exit(1);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg).expect("bundle serializes")
        );
        return;
    }

    println!("=== Double Cart-Pole Task Bundle ===\n");

    // ---------------------------------------------------------------
    // 1. Scene
    // ---------------------------------------------------------------
    println!(
        "Scene:   {} envs, {:.1} m spacing",
        cfg.scene.num_envs, cfg.scene.env_spacing
    );
    println!(
        "Robot:   {} ({} joints: {})",
        cfg.scene.robot.prim_path,
        cfg.scene.robot.joint_names.len(),
        cfg.scene.robot.joint_names.join(", ")
    );
    match &cfg.scene.camera {
        Some(rig) => println!(
            "Camera:  {}x{} @ {}",
            rig.camera.width, rig.camera.height, rig.camera.prim_path
        ),
        None => println!("Camera:  none"),
    }

    // ---------------------------------------------------------------
    // 2. MDP terms
    // ---------------------------------------------------------------
    println!(
        "\nAction:  effort on {} (scale {})",
        cfg.actions.joint_effort.joint_names.join(", "),
        cfg.actions.joint_effort.scale
    );
    println!(
        "Obs:     policy group [{}], corruption={}, concat={}",
        cfg.observations.policy.term_names().join(", "),
        cfg.observations.policy.enable_corruption,
        cfg.observations.policy.concatenate_terms
    );
    println!("Events:");
    for term in cfg.events.reset_terms() {
        println!("  - {} ({:?})", term.name, term.mode);
    }
    println!("Rewards:");
    for (name, term) in cfg.rewards.terms() {
        println!("  - {name:<16} weight {:+}", term.weight);
    }
    println!("Terminations:");
    for (name, term) in cfg.terminations.terms() {
        let kind = if term.time_out { "timeout" } else { "failure" };
        match &term.func {
            TerminationFn::TimeOut => println!("  - {name:<18} ({kind})"),
            TerminationFn::JointPosOutOfLimit { bounds, .. } => {
                println!("  - {name:<18} ({kind}, bounds [{}, {}])", bounds.0, bounds.1);
            }
        }
    }

    // ---------------------------------------------------------------
    // 3. Simulation
    // ---------------------------------------------------------------
    println!(
        "\nSim:     dt {:.6} s ({:.0} Hz), decimation {}, render every {} steps, fabric={}",
        cfg.sim.dt,
        cfg.sim.physics_hz(),
        cfg.decimation,
        cfg.sim.render_interval,
        cfg.sim.use_fabric
    );
    println!(
        "Episode: {:.1} s = {} control steps",
        cfg.episode_length_s,
        cfg.episode_length_steps()
    );

    // ---------------------------------------------------------------
    // 4. Lints
    // ---------------------------------------------------------------
    let findings = lint(&cfg);
    if findings.is_empty() {
        println!("\nLints:   clean");
    } else {
        println!("\nLints:");
        for finding in findings {
            println!("  - {finding}");
        }
    }
}
