//! Tests for tick progress display

#[cfg(test)]
mod tests {
    use qixfield::io::progress::ProgressManager;

    // Tests updates move the bar to the reported tick
    // Verified by ignoring the tick in update
    #[test]
    fn test_progress_updates() {
        let pm = ProgressManager::new(100);
        assert_eq!(pm.position(), 0);

        pm.update(25, 0.1);
        assert_eq!(pm.position(), 25);

        pm.update(100, 0.75);
        assert_eq!(pm.position(), 100);
        pm.finish();
    }

    // Tests an empty session can be shown and cleared
    // Verified by dividing by the total in the style template
    #[test]
    fn test_progress_zero_ticks() {
        let pm = ProgressManager::new(0);
        pm.update(0, 0.0);
        pm.finish();
        assert_eq!(pm.position(), 0);
    }
}
