use plot_addons::{backend, figure, style::FIGURE_1_1, Backend, Error};

#[test]
fn configure_before_the_first_figure() -> Result<(), Box<dyn std::error::Error>> {
    backend::configure(Backend::Svg)?;
    assert_eq!(backend::current(), Backend::Svg);
    let fig = figure(FIGURE_1_1, 100.)?;
    assert_eq!(fig.backend(), Backend::Svg);
    assert!(matches!(
        backend::configure(Backend::Bitmap),
        Err(Error::BackendLocked)
    ));
    assert_eq!(backend::current(), Backend::Svg);
    Ok(())
}
