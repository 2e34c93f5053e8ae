//! Tests for grayscale decoding and one-bit encoding

#[cfg(test)]
mod tests {
    use bilevel::algorithm::DitherOutput;
    use bilevel::buffer::{BinaryBuffer, GrayscaleBuffer};
    use bilevel::io::configuration::{EIGHT_BIT_SCALE, MAX_SAMPLE};
    use bilevel::io::error::DitherError;
    use bilevel::io::image::{load_grayscale, save_binary, save_grayscale, save_output};
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    // Written bits decode to the two ends of the quantum
    #[test]
    fn test_binary_written_as_black_and_white() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bits.png");

        let mut bits = BinaryBuffer::new(3, 2);
        bits.set(1, 0, true);
        bits.set(2, 1, true);
        save_binary(&bits, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 0), &Luma([255]));
        assert_eq!(decoded.get_pixel(0, 0), &Luma([0]));

        let reloaded = load_grayscale(&path).unwrap();
        assert_eq!(reloaded.get(2, 1), Some(MAX_SAMPLE));
        assert_eq!(reloaded.get(0, 1), Some(0));
    }

    // Color input is reduced to luminance and scaled onto the quantum
    #[test]
    fn test_load_color_image_as_luminance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("color.png");
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));
        img.save(&path).unwrap();

        let image = load_grayscale(&path).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.get(0, 0), Some(MAX_SAMPLE));
        assert_eq!(image.get(1, 0), Some(0));
    }

    #[test]
    fn test_load_gray_levels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gray.png");
        GrayImage::from_fn(4, 1, |x, _| Luma([(x * 60) as u8]))
            .save(&path)
            .unwrap();

        let image = load_grayscale(&path).unwrap();
        assert_eq!(image.get(1, 0), Some(60 * EIGHT_BIT_SCALE));
        assert_eq!(image.get(3, 0), Some(180 * EIGHT_BIT_SCALE));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_grayscale("does/not/exist.png");
        assert!(matches!(result, Err(DitherError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fake.png");
        fs::write(&path, "not a png").unwrap();
        assert!(matches!(
            load_grayscale(&path),
            Err(DitherError::ImageLoad { .. })
        ));
    }

    // Missing parent directories are created
    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/out.png");
        save_binary(&BinaryBuffer::new(2, 2), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.unknownformat");
        let result = save_binary(&BinaryBuffer::new(2, 2), &path);
        assert!(matches!(result, Err(DitherError::ImageExport { .. })));
    }

    // Passthrough output keeps every 8-bit level
    #[test]
    fn test_grayscale_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gray_out.png");
        let image =
            GrayscaleBuffer::from_fn(16, 16, |x, y| ((x + 16 * y) as u16) * EIGHT_BIT_SCALE)
                .unwrap();

        save_grayscale(&image, &path).unwrap();
        assert_eq!(load_grayscale(&path).unwrap(), image);
    }

    #[test]
    fn test_save_output_dispatches_on_variant() {
        let temp_dir = TempDir::new().unwrap();
        let binary_path = temp_dir.path().join("binary.png");
        let gray_path = temp_dir.path().join("gray.png");

        let mut bits = BinaryBuffer::new(2, 1);
        bits.set(0, 0, true);
        save_output(&DitherOutput::Binary(bits), &binary_path).unwrap();

        let gray = GrayscaleBuffer::from_fn(2, 1, |_, _| 100 * EIGHT_BIT_SCALE).unwrap();
        save_output(&DitherOutput::Passthrough(gray), &gray_path).unwrap();

        assert_eq!(load_grayscale(&binary_path).unwrap().get(0, 0), Some(MAX_SAMPLE));
        assert_eq!(
            load_grayscale(&gray_path).unwrap().get(1, 0),
            Some(100 * EIGHT_BIT_SCALE)
        );
    }
}
