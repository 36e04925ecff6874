//! Tests for progress tracking across batches of scripts

#[cfg(test)]
mod tests {
    use mazegrid::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use mazegrid::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    fn run_script(pm: &mut ProgressManager, index: usize, commands: usize) {
        pm.start_script(index, Path::new(&format!("script{index}.maze")), commands);
        for step in 1..=commands {
            pm.update_step(index, step);
        }
        pm.complete_script(index, Duration::from_millis(1));
    }

    // Tests a full lifecycle for a single script
    #[test]
    fn test_single_script_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_script(0, Path::new("rooms/demo.maze"), 4);
        assert_eq!(pm.visible_scripts(), ["demo.maze"]);

        for step in 1..=4 {
            pm.update_step(0, step);
        }
        pm.complete_script(0, Duration::from_millis(3));

        assert_eq!(pm.visible_scripts(), ["✓ demo.maze"]);
        assert_eq!(pm.commands_run(), 4);
        pm.finish();
    }

    // Tests empty batches and the default constructor
    #[test]
    fn test_default_and_empty() {
        let mut pm = ProgressManager::default();
        pm.initialize(0);
        assert!(!pm.is_batched());
        assert!(pm.visible_scripts().is_empty());
        pm.finish();
    }

    // Tests the batch bar appears exactly when scripts outnumber the bars
    #[test]
    fn test_batch_threshold() {
        let mut at_limit = ProgressManager::new();
        at_limit.initialize(MAX_INDIVIDUAL_PROGRESS_BARS);
        assert!(!at_limit.is_batched());

        let mut past_limit = ProgressManager::new();
        past_limit.initialize(MAX_INDIVIDUAL_PROGRESS_BARS + 1);
        assert!(past_limit.is_batched());
    }

    // Tests only the most recently started scripts stay visible
    #[test]
    fn test_batch_mode_rolls_visible_scripts() {
        let mut pm = ProgressManager::new();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(count);

        for index in 0..count {
            run_script(&mut pm, index, 2);
        }

        let expected: Vec<String> = (3..count)
            .map(|index| format!("✓ script{index}.maze"))
            .collect();
        assert_eq!(pm.visible_scripts(), expected);
        assert_eq!(pm.commands_run(), count * 2);
        pm.finish();
    }

    // Tests a failed script is marked and keeps its partial count
    #[test]
    fn test_failed_script_is_marked() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        run_script(&mut pm, 0, 1);
        pm.start_script(1, Path::new("broken.maze"), 5);
        pm.update_step(1, 2);
        pm.fail_script(1);

        assert_eq!(pm.visible_scripts(), ["✓ script0.maze", "✗ broken.maze"]);
        assert_eq!(pm.commands_run(), 3);
        pm.finish();
    }

    // Tests updates for scripts that were never started are ignored
    #[test]
    fn test_updates_out_of_order() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.update_step(1, 5);
        pm.complete_script(1, Duration::ZERO);
        pm.fail_script(0);
        assert_eq!(pm.commands_run(), 0);

        pm.start_script(1, Path::new("late.maze"), 0);
        pm.start_script(1, Path::new("late.maze"), 0);
        assert_eq!(pm.visible_scripts(), ["late.maze"]);
        pm.finish();
    }
}
