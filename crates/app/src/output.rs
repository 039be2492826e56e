//! Image encoding and output paths

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, RgbaImage};
use tracing::debug;
use zmark_raster::Canvas;

/// Resolve the image format from an explicit name or the output extension.
/// Falls back to PNG.
pub fn resolve_format(format: Option<&str>, output: Option<&Path>) -> Result<ImageFormat> {
    if let Some(name) = format {
        return ImageFormat::from_extension(name)
            .ok_or_else(|| anyhow!("Unknown image format: {name}"));
    }
    Ok(output
        .and_then(|path| ImageFormat::from_path(path).ok())
        .unwrap_or(ImageFormat::Png))
}

/// Output path: the explicit one, or `<out_dir>/<identifier>.<ext>`
pub fn resolve_output_path(
    output: Option<&Path>,
    out_dir: &Path,
    identifier: &str,
    format: ImageFormat,
) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let extension = format.extensions_str().first().copied().unwrap_or("png");
            out_dir.join(format!("{identifier}.{extension}"))
        }
    }
}

/// Wrap the canvas in an image buffer
pub fn to_image(canvas: Canvas) -> Result<RgbaImage> {
    let (width, height) = (canvas.width, canvas.height);
    RgbaImage::from_raw(width, height, canvas.into_raw())
        .ok_or_else(|| anyhow!("Canvas buffer does not match {width}x{height}"))
}

/// Encode the canvas to `path`, creating parent directories as needed
pub fn save_canvas(canvas: Canvas, path: &Path, format: ImageFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let image = to_image(canvas)?;
    // JPEG has no alpha channel
    let result = if format == ImageFormat::Jpeg {
        image::DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(path, format)
    } else {
        image.save_with_format(path, format)
    };
    result.with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("save_canvas: wrote {} as {:?}", path.display(), format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zmark_config::Color;

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, None).unwrap(), ImageFormat::Png);
        assert_eq!(
            resolve_format(None, Some(Path::new("a/b.bmp"))).unwrap(),
            ImageFormat::Bmp
        );
        assert_eq!(
            resolve_format(Some("jpg"), Some(Path::new("a/b.png"))).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(resolve_format(Some("nope"), None).is_err());
        assert_eq!(
            resolve_format(None, Some(Path::new("noext"))).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_default_output_path() {
        let path = resolve_output_path(None, Path::new("renders"), "z_logo_1", ImageFormat::Png);
        assert_eq!(path, PathBuf::from("renders/z_logo_1.png"));

        let explicit = resolve_output_path(
            Some(Path::new("x.webp")),
            Path::new("renders"),
            "z_logo_1",
            ImageFormat::Png,
        );
        assert_eq!(explicit, PathBuf::from("x.webp"));
    }

    #[test]
    fn test_png_round_trip() {
        let mut canvas = Canvas::new(4, 3, Color::rgb(0, 0, 0));
        canvas.set_pixel(3, 0, Color::rgba(10, 20, 30, 40));

        let dir = std::env::temp_dir().join(format!("zmark-output-{}", std::process::id()));
        let path = dir.join("nested").join("canvas.png");
        save_canvas(canvas, &path, ImageFormat::Png).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(3, 0).0, [10, 20, 30, 40]);
        assert_eq!(decoded.get_pixel(0, 2).0, [0, 0, 0, 255]);
    }
}
