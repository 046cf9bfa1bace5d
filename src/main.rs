//! Entity Sim entry point
//!
//! Spawns a field of entities and drives them through a fixed number of
//! simulated frames, logging when boxes start and stop overlapping.
//!
//! Usage: `entity-sim [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::process;

    use entity_sim::Settings;
    use entity_sim::sim::{FrameClock, overlapping_pairs, spawn_entities, step_all};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Entity Sim starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        },
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    if let Err(e) = settings.validate() {
        log::error!("{e}");
        process::exit(1);
    }

    let mut entities = spawn_entities(&settings);
    let mut clock = FrameClock::new(settings.step_millis, settings.max_substeps);
    let mut contacts: BTreeSet<(usize, usize)> = overlapping_pairs(&entities).into_iter().collect();
    let mut contacts_started = 0_usize;

    for frame in 0..settings.frames {
        for _ in 0..clock.advance(settings.frame_millis) {
            step_all(&mut entities, clock.step_millis);
        }

        let current: BTreeSet<(usize, usize)> = overlapping_pairs(&entities).into_iter().collect();
        for &(i, j) in current.difference(&contacts) {
            contacts_started += 1;
            log::debug!(
                "Frame {}: entity {} hit entity {}",
                frame,
                entities[i].payload(),
                entities[j].payload()
            );
        }
        for &(i, j) in contacts.difference(&current) {
            log::trace!(
                "Frame {}: entity {} left entity {}",
                frame,
                entities[i].payload(),
                entities[j].payload()
            );
        }
        contacts = current;
    }

    println!(
        "Ran {} frames ({} steps of {} ms) with {} entities",
        settings.frames,
        clock.ticks(),
        clock.step_millis,
        entities.len()
    );
    println!(
        "Contacts started: {}, overlapping at end: {}",
        contacts_started,
        contacts.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser driver; the library is used directly
}
