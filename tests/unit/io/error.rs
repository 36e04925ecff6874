//! Tests for error display, sources and context enrichment

#[cfg(test)]
mod tests {
    use mazegrid::MazeError;
    use mazegrid::io::error::{
        ErrorContext, WithContext, invalid_parameter, out_of_bounds, script_error,
    };
    use mazegrid::spatial::vector::Vector2D;
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests messages name the values involved
    #[test]
    fn test_display_messages() {
        assert_eq!(
            out_of_bounds(Vector2D::new(5, 1), (5, 3)).to_string(),
            "Position (5, 1) is outside the 5x3 grid"
        );
        assert_eq!(
            MazeError::InvalidDimensions {
                width: 0,
                height: 3,
                reason: "both sides must be positive",
            }
            .to_string(),
            "Cannot create a 0x3 grid: both sides must be positive"
        );
        assert_eq!(
            MazeError::DivisionByZero {
                operation: "vector division"
            }
            .to_string(),
            "Division by zero in vector division"
        );
        assert_eq!(
            MazeError::Overflow {
                operation: "vector division"
            }
            .to_string(),
            "Integer overflow in vector division"
        );
        assert_eq!(
            MazeError::UnsetRoom {
                position: Vector2D::new(2, 2)
            }
            .to_string(),
            "No room placed at (2, 2) to rotate"
        );
        assert_eq!(
            invalid_parameter("width", &-1, &"must be positive").to_string(),
            "Invalid parameter 'width' = '-1': must be positive"
        );
        assert_eq!(
            script_error(4, &"unknown command `jump`").to_string(),
            "Script error on line 4: unknown command `jump`"
        );
    }

    // Tests command errors expose the grid error as their source
    #[test]
    fn test_command_source_chain() {
        let err = MazeError::Command {
            line: 3,
            source: Box::new(out_of_bounds(Vector2D::new(9, 9), (5, 3))),
        };
        assert_eq!(
            err.to_string(),
            "Command on line 3 failed: Position (9, 9) is outside the 5x3 grid"
        );
        assert!(
            err.source()
                .is_some_and(|source| source.to_string().starts_with("Position (9, 9)"))
        );
        assert!(script_error(1, &"bad").source().is_none());
    }

    // Tests line context wraps grid errors but not script errors
    #[test]
    fn test_with_line() {
        let failed: Result<(), MazeError> = Err(MazeError::UnsetRoom {
            position: Vector2D::ZERO,
        });
        assert!(matches!(
            failed.with_line(12),
            Err(MazeError::Command { line: 12, .. })
        ));

        let parse: Result<(), MazeError> = Err(script_error(2, &"bad"));
        assert!(matches!(
            parse.with_line(12),
            Err(MazeError::Script { line: 2, .. })
        ));

        let ok: Result<u8, MazeError> = Ok(1);
        assert!(matches!(ok.with_line(1), Ok(1)));
    }

    // Tests path context replaces the placeholder of converted I/O errors
    #[test]
    fn test_with_context_sets_unknown_path() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let err = io.with_context(ErrorContext {
            path: Some(PathBuf::from("rooms/demo.maze")),
            ..Default::default()
        });
        match err {
            Err(MazeError::FileSystem { path, source, .. }) => {
                assert_eq!(path, PathBuf::from("rooms/demo.maze"));
                assert_eq!(source.to_string(), "disk full");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests path shorthand names the directory of a failed listing
    #[test]
    fn test_with_path() {
        let io: Result<u8, std::io::Error> = Err(std::io::Error::other("denied"));
        assert!(matches!(
            io.with_path(Path::new("rooms")),
            Err(MazeError::FileSystem { ref path, .. }) if path == Path::new("rooms")
        ));

        let ok: Result<u8, std::io::Error> = Ok(3);
        assert!(matches!(ok.with_path(Path::new("rooms")), Ok(3)));
    }

    // Tests an explicit path is kept when context is added later
    #[test]
    fn test_with_context_keeps_known_path() {
        let err: Result<(), MazeError> = Err(MazeError::FileSystem {
            path: PathBuf::from("a.maze"),
            operation: "read script",
            source: std::io::Error::other("gone"),
        });
        let enriched = err.with_context(ErrorContext {
            path: Some(PathBuf::from("b.maze")),
            ..Default::default()
        });
        assert!(matches!(
            enriched,
            Err(MazeError::FileSystem { ref path, .. }) if path == &PathBuf::from("a.maze")
        ));
    }
}
