//! Golf course demo
//!
//! Builds obstacles from sprite outlines, spins them and rolls a probe ball
//! across the course without opening a window. Pass a `.toml` or `.ron`
//! course file as the first argument, or run with the built-in course.

mod ball;
mod config;
mod course;
mod sprites;

use sprite_collider::config::Config;

use crate::config::CourseConfig;
use crate::course::Course;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    
    log::info!("Starting golf demo");
    
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading course from {}", path);
            CourseConfig::load_from_file(&path)?
        }
        None => {
            log::info!("No course file given, using the built-in course");
            CourseConfig::default()
        }
    };
    
    let mut course = Course::from_config(&config)?;
    log::info!(
        "Course ready: {} obstacles, {} frames at {:.4}s",
        course.obstacle_count(), config.frames, config.time_step
    );
    
    let summary = course.run(config.frames, config.time_step);
    log::debug!("{} debug shapes on the last frame", course.debug_shape_count());
    let ball = course.ball();
    
    log::info!(
        "Ran {} frames: {} contacts over {} frames, ball at ({:.1}, {:.1})",
        summary.frames, summary.contacts, summary.frames_with_contact,
        ball.position.x, ball.position.y
    );
    match summary.sunk_on_frame {
        Some(frame) => log::info!("Hole in one on frame {}", frame),
        None => log::info!("Ball missed the hole"),
    }
    
    Ok(())
}
