#![cfg(unix)]

use plot_addons::video::{write_video_from_image_slices, Encoder, FFMPEG_ENV};
use std::env;

#[test]
fn stitch_with_the_configured_encoder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::temp_dir().join("plot-addons-stitch-test");
    std::fs::create_dir_all(&dir)?;
    let output = dir.join("frames.mp4");
    let paths = Encoder::new().log_paths(&output);
    for path in [&paths.stdout, &paths.stderr] {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
    }

    env::set_var(FFMPEG_ENV, "true");
    assert_eq!(write_video_from_image_slices("%06d.png", &output, 24, 2)?, 0);
    assert!(paths.stdout.exists() && paths.stderr.exists());

    env::set_var(FFMPEG_ENV, "false");
    assert_eq!(write_video_from_image_slices("%06d.png", &output, 24, 2)?, 1);
    Ok(())
}
