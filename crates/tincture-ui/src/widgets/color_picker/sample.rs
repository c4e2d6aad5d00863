use tincture_engine::coords::Vec2;
use tincture_engine::paint::Rgb;
use tincture_engine::pixels::PixelBuffer;

use super::error::SwatchError;

/// Color of the swatch pixel under an absolute pointer position.
///
/// `origin` is the absolute position of the swatch's top-left pixel. The local
/// offset is rounded half away from zero, then read at byte index
/// `((width * y) + x) * 4`. Positions outside the painted area fail with
/// [`SwatchError::OutOfRangeSample`]; an unpainted (empty) buffer fails for
/// every position.
pub fn color_at(buffer: &PixelBuffer, absolute: Vec2, origin: Vec2) -> Result<Rgb, SwatchError> {
    let (x, y) = (absolute - origin).to_pixel();
    let i = buffer.index_of(x, y).ok_or(SwatchError::OutOfRangeSample {
        x,
        y,
        width: buffer.width(),
        height: buffer.height(),
    })?;
    let data = buffer.as_bytes();
    Ok(Rgb::new(data[i], data[i + 1], data[i + 2]))
}

#[cfg(test)]
mod tests {
    use super::super::swatch::paint_swatch;
    use super::*;

    #[test]
    fn returns_stored_bytes_exactly() {
        let buf = paint_swatch(100, 10);
        let origin = Vec2::new(40.0, 30.0);
        for (x, y) in [(0, 0), (3, 9), (10, 5), (57, 2), (99, 9)] {
            let got = color_at(&buf, origin + Vec2::new(x as f32, y as f32), origin).unwrap();
            let i = ((100 * y) + x) * 4;
            let bytes = buf.as_bytes();
            assert_eq!(got, Rgb::new(bytes[i], bytes[i + 1], bytes[i + 2]));
        }
    }

    #[test]
    fn fractional_offsets_round_to_nearest_pixel() {
        let buf = paint_swatch(100, 10);
        let origin = Vec2::new(0.0, 0.0);
        let rounded = color_at(&buf, Vec2::new(11.5, 4.4), origin).unwrap();
        assert_eq!(rounded, buf.get(12, 4).unwrap().rgb());
    }

    #[test]
    fn outside_fails() {
        let buf = paint_swatch(100, 10);
        let origin = Vec2::new(5.0, 5.0);
        let err = color_at(&buf, Vec2::new(105.0, 6.0), origin).unwrap_err();
        assert_eq!(err, SwatchError::OutOfRangeSample { x: 100, y: 1, width: 100, height: 10 });
        assert!(color_at(&buf, Vec2::new(4.0, 6.0), origin).is_err());
        assert!(color_at(&buf, Vec2::new(6.0, 15.0), origin).is_err());
    }

    #[test]
    fn rounding_onto_far_edge_fails() {
        let buf = paint_swatch(10, 10);
        // 9.6 rounds to 10, one past the last column.
        assert!(color_at(&buf, Vec2::new(9.6, 0.0), Vec2::zero()).is_err());
    }

    #[test]
    fn unpainted_buffer_fails() {
        let err = color_at(&PixelBuffer::empty(), Vec2::zero(), Vec2::zero()).unwrap_err();
        assert!(matches!(err, SwatchError::OutOfRangeSample { width: 0, height: 0, .. }));
    }
}
