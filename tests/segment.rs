mod tests {
    use led_strip_engine::{CapacityError, Rgb, Segment, SegmentBuffer};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const DIM: Rgb = Rgb {
        r: 100,
        g: 50,
        b: 255,
    };

    fn seg(length: u16, color: Rgb) -> Segment {
        Segment { length, color }
    }

    #[test]
    fn test_push_and_total_length() {
        let mut buf: SegmentBuffer<4> = SegmentBuffer::new();
        assert!(buf.is_empty());
        buf.push(seg(10, RED)).unwrap();
        buf.push(seg(0, DIM)).unwrap();
        buf.push(seg(7, RED)).unwrap();

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.total_length(), 17);
    }

    #[test]
    fn test_capacity_exceeded_is_reported() {
        let mut buf: SegmentBuffer<1> = SegmentBuffer::new();
        buf.push(seg(1, RED)).unwrap();
        assert_eq!(buf.push(seg(2, RED)), Err(CapacityError));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut original: SegmentBuffer<2> = SegmentBuffer::new();
        original.push(seg(5, RED)).unwrap();

        let mut copy = original.clone();
        copy.get_mut(0).unwrap().length = 99;
        copy.push(seg(1, DIM)).unwrap();

        assert_eq!(original.get(0).unwrap().length, 5);
        assert_eq!(original.len(), 1);
    }

    #[test]
    fn test_apply_brightness_scales_every_segment() {
        let mut buf: SegmentBuffer<2> = SegmentBuffer::new();
        buf.push(seg(3, DIM)).unwrap();
        buf.push(seg(4, RED)).unwrap();

        buf.apply_brightness(0);
        assert!(buf.iter().all(|s| s.color == Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_full_brightness_leaves_colors_untouched() {
        let mut buf: SegmentBuffer<1> = SegmentBuffer::new();
        buf.push(seg(3, DIM)).unwrap();
        buf.apply_brightness(255);
        assert_eq!(buf.get(0).unwrap().color, DIM);
    }
}
