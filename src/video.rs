//! Video from an image sequence
//!
//! The frames are stitched into an h264 `.mov` by `ffmpeg`.
//! The encoder messages are written next to the video in `<stem>.stdout` and `<stem>.stderr`.

use crate::{Error, Result};
use std::{
    env,
    ffi::OsString,
    fs::File,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Environment variable overriding the encoder program
pub const FFMPEG_ENV: &str = "PLOT_ADDONS_FFMPEG";

/// Video encoder settings
#[derive(Debug, Clone, PartialEq)]
pub struct Encoder {
    program: OsString,
    fps: u32,
    threads: usize,
    crf: u32,
    crf_max: u32,
    codec: String,
}
impl Default for Encoder {
    fn default() -> Self {
        Self {
            program: env::var_os(FFMPEG_ENV).unwrap_or_else(|| "ffmpeg".into()),
            fps: 30,
            threads: 1,
            crf: 23,
            crf_max: 25,
            codec: "h264".to_string(),
        }
    }
}

/// Files written by the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub stdout: PathBuf,
    pub stderr: PathBuf,
    pub video: PathBuf,
}

impl Encoder {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn program(self, program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..self
        }
    }
    /// Frames per second
    pub fn fps(self, fps: u32) -> Self {
        Self { fps, ..self }
    }
    pub fn threads(self, threads: usize) -> Self {
        Self { threads, ..self }
    }
    /// Constant rate factor, from 0 (best) to 51 (worst)
    pub fn crf(self, crf: u32) -> Self {
        Self { crf, ..self }
    }
    /// Worst constant rate factor allowed
    pub fn crf_max(self, crf_max: u32) -> Self {
        Self { crf_max, ..self }
    }
    /// Paths of the encoder logs and of the video derived from `output`
    ///
    /// Whatever the extension of `output`, the video is a `.mov`.
    pub fn log_paths<P: AsRef<Path>>(&self, output: P) -> LogPaths {
        let output = output.as_ref();
        LogPaths {
            stdout: output.with_extension("stdout"),
            stderr: output.with_extension("stderr"),
            video: output.with_extension("mov"),
        }
    }
    /// Command line arguments of the encoder
    ///
    /// `input_pattern` is the path to the frames with a six digits wildcard, e.g. `frames/%06d.png`
    pub fn arguments<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_pattern: P,
        video: Q,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-y".into(),
            "-framerate".into(),
            self.fps.to_string().into(),
            "-f".into(),
            "image2".into(),
            "-i".into(),
            input_pattern.as_ref().into(),
            "-c:v".into(),
            self.codec.as_str().into(),
            "-crf".into(),
            self.crf.to_string().into(),
            "-crf_max".into(),
            self.crf_max.to_string().into(),
            "-threads".into(),
            self.threads.to_string().into(),
        ];
        args.push(video.as_ref().into());
        args
    }
    /// Runs the encoder until it exits and returns its exit code
    pub fn encode<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_pattern: P, output: Q) -> Result<i32> {
        let paths = self.log_paths(output);
        let stdout = File::create(&paths.stdout)?;
        let stderr = File::create(&paths.stderr)?;
        log::info!(
            "encoding {:?} into {:?} with {:?}",
            input_pattern.as_ref(),
            paths.video,
            self.program
        );
        let status = Command::new(&self.program)
            .args(self.arguments(input_pattern, &paths.video))
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()?;
        let code = status.code().ok_or(Error::Terminated)?;
        if code != 0 {
            log::warn!("encoder exited with code {code}, see {:?}", paths.stderr);
        }
        Ok(code)
    }
}

/// Writes an h264 `.mov` video from an image sequence
///
/// The encoder is `ffmpeg` unless [FFMPEG_ENV] names another program.
/// Returns the encoder exit code.
pub fn write_video_from_image_slices<P: AsRef<Path>, Q: AsRef<Path>>(
    input_pattern: P,
    output: Q,
    fps: u32,
    threads: usize,
) -> Result<i32> {
    Encoder::new()
        .fps(fps)
        .threads(threads)
        .encode(input_pattern, output)
}
