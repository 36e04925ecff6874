//! Tests for rectangle geometry and clipping against grid bounds

#[cfg(test)]
mod tests {
    use mazegrid::spatial::rect::Rect;
    use mazegrid::spatial::vector::Vector2D;

    // Tests corner, extent and area accessors
    #[test]
    fn test_accessors() {
        let rect = Rect::from_corners(Vector2D::new(2, 1), Vector2D::new(3, 2));
        assert_eq!(rect, Rect::new(2, 1, 3, 2));
        assert_eq!(rect.origin(), Vector2D::new(2, 1));
        assert_eq!(rect.extent(), Vector2D::new(3, 2));
        assert_eq!(rect.area(), 6);
        assert!(!rect.is_empty());
        assert!(!rect.is_inverted());
    }

    // Tests empty and inverted rectangles cover no cells
    #[test]
    fn test_empty_and_inverted() {
        assert!(Rect::new(0, 0, 0, 3).is_empty());
        assert!(!Rect::new(0, 0, 0, 3).is_inverted());
        assert!(Rect::new(0, 0, -1, 3).is_inverted());
        assert_eq!(Rect::new(0, 0, -1, 3).area(), 0);
    }

    // Tests containment uses an exclusive right and bottom edge
    #[test]
    fn test_contains() {
        let rect = Rect::new(1, 1, 2, 2);
        assert!(rect.contains(Vector2D::new(1, 1)));
        assert!(rect.contains(Vector2D::new(2, 2)));
        assert!(!rect.contains(Vector2D::new(3, 2)));
        assert!(!rect.contains(Vector2D::new(0, 1)));
    }

    // Tests translation keeps the extent
    #[test]
    fn test_translated() {
        let rect = Rect::new(2, 1, 2, 2).translated(Vector2D::new(-1, -1));
        assert_eq!(rect, Rect::new(1, 0, 2, 2));
    }

    // Tests clipping inside, across and outside the grid
    #[test]
    fn test_clip_to() {
        assert_eq!(
            Rect::new(1, 1, 2, 2).clip_to(5, 3),
            Some(Rect::new(1, 1, 2, 2))
        );
        assert_eq!(
            Rect::new(-1, 2, 3, 4).clip_to(5, 3),
            Some(Rect::new(0, 2, 2, 1))
        );
        assert_eq!(
            Rect::new(4, -5, 10, 10).clip_to(5, 3),
            Some(Rect::new(4, 0, 1, 3))
        );
        assert_eq!(Rect::new(5, 0, 2, 2).clip_to(5, 3), None);
        assert_eq!(Rect::new(-2, 0, 2, 2).clip_to(5, 3), None);
        assert_eq!(Rect::new(1, 1, 0, 2).clip_to(5, 3), None);
        assert_eq!(Rect::new(1, 1, -2, 2).clip_to(5, 3), None);
    }

    // Tests clipping saturates instead of overflowing at the integer limits
    #[test]
    fn test_clip_to_extreme_values() {
        assert_eq!(
            Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).clip_to(5, 3),
            None
        );
        assert_eq!(
            Rect::new(2, 1, i32::MAX, i32::MAX).clip_to(5, 3),
            Some(Rect::new(2, 1, 3, 2))
        );
        assert_eq!(
            Rect::new(0, 0, 1, 1).translated(Vector2D::new(i32::MAX, 0)),
            Rect::new(i32::MAX, 0, 1, 1)
        );
    }

    // Tests index ranges of a clipped rectangle
    #[test]
    fn test_ranges() {
        let rect = Rect::new(1, 2, 3, 1);
        assert_eq!(rect.column_range(), 1..4);
        assert_eq!(rect.row_range(), 2..3);
    }

    // Tests human readable form used in log and error messages
    #[test]
    fn test_display() {
        assert_eq!(Rect::new(2, 1, 3, 2).to_string(), "3x2 at (2, 1)");
    }
}
