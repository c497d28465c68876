use anyhow::Context;
use plot_addons::video::Encoder;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "stitch-video",
    about = "Stitches an image sequence into an h264 .mov video"
)]
struct Opt {
    /// Path to the images with a six digits wildcard, e.g. `frames/%06d.png`
    input: String,
    /// Path to the video, the extension is replaced by `.mov`
    output: PathBuf,
    /// Frames per second
    #[structopt(short, long, default_value = "30")]
    fps: u32,
    /// Number of encoder threads
    #[structopt(short, long, default_value = "1")]
    threads: usize,
    /// Constant rate factor, 0 (best) to 51 (worst)
    #[structopt(long, default_value = "23")]
    crf: u32,
    /// Encoder program, overrides `PLOT_ADDONS_FFMPEG`
    #[structopt(long)]
    ffmpeg: Option<String>,
    /// Prints the encoder command line and exits
    #[structopt(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut encoder = Encoder::new()
        .fps(opt.fps)
        .threads(opt.threads)
        .crf(opt.crf);
    if let Some(program) = opt.ffmpeg {
        encoder = encoder.program(program);
    }

    let paths = encoder.log_paths(&opt.output);
    if opt.dry_run {
        let args: Vec<_> = encoder
            .arguments(&opt.input, &paths.video)
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        println!("{}", args.join(" "));
        return Ok(());
    }

    let code = encoder
        .encode(&opt.input, &opt.output)
        .with_context(|| format!("failed to encode {} into {:?}", opt.input, paths.video))?;
    if code != 0 {
        log::error!("encoder failed, see {:?}", paths.stderr);
        std::process::exit(code);
    }
    println!("{:?}", paths.video);
    Ok(())
}
