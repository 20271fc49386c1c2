mod tests {
    use core::time::Duration as Timestamp;

    use gpio_softpwm::events::{MAX_TRACKED_LINES, PressMonitor, PressTally};
    use gpio_softpwm::gpio::mock::{MockEdges, MockOutput};
    use gpio_softpwm::{Duration, EdgeEvent, EdgeKind, Level};

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn falling(offset: u32, millis: u64) -> EdgeEvent {
        EdgeEvent {
            offset,
            kind: EdgeKind::Falling,
            timestamp: Timestamp::from_millis(millis),
        }
    }

    #[test]
    fn test_tally_counts_per_line() {
        let mut tally = PressTally::new();
        assert_eq!(tally.record(27), Some(1));
        assert_eq!(tally.record(22), Some(1));
        assert_eq!(tally.record(27), Some(2));
        assert_eq!(tally.count(27), 2);
        assert_eq!(tally.count(5), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_tally_capacity() {
        let mut tally = PressTally::new();
        for offset in 0..MAX_TRACKED_LINES as u32 {
            assert_eq!(tally.record(offset), Some(1));
        }
        assert_eq!(tally.record(100), None);
        assert_eq!(tally.record(0), Some(2));
    }

    #[test]
    fn test_presses_toggle_led() {
        let (events, edges) = MockEdges::new();
        let (led, output) = MockOutput::new(17);
        let mut monitor = PressMonitor::new(events, led);

        edges.push(falling(27, 10)).unwrap();
        edges.push(falling(22, 20)).unwrap();
        edges.push(falling(27, 30)).unwrap();

        let first = monitor.poll(TIMEOUT).unwrap().unwrap();
        assert_eq!((first.offset, first.count, first.led), (27, 1, Level::High));
        assert_eq!(first.timestamp, Timestamp::from_millis(10));
        assert_eq!(output.level(), Level::High);

        let second = monitor.poll(TIMEOUT).unwrap().unwrap();
        assert_eq!((second.offset, second.count, second.led), (22, 1, Level::Low));
        assert_eq!(output.level(), Level::Low);

        let third = monitor.poll(TIMEOUT).unwrap().unwrap();
        assert_eq!((third.offset, third.count, third.led), (27, 2, Level::High));

        assert_eq!(monitor.poll(TIMEOUT).unwrap(), None);

        let tally = monitor.shutdown().unwrap();
        assert_eq!(tally.count(27), 2);
        assert_eq!(tally.count(22), 1);
        assert_eq!(output.level(), Level::Low);
    }

    #[test]
    fn test_rising_edges_ignored() {
        let (events, edges) = MockEdges::new();
        let (led, output) = MockOutput::new(17);
        let mut monitor = PressMonitor::new(events, led);

        edges
            .push(EdgeEvent {
                offset: 27,
                kind: EdgeKind::Rising,
                timestamp: Timestamp::from_millis(5),
            })
            .unwrap();

        assert_eq!(monitor.poll(TIMEOUT).unwrap(), None);
        assert_eq!(output.writes(), 0);
        assert_eq!(monitor.tally().total(), 0);
    }

    #[test]
    fn test_led_failure_does_not_fail_poll() {
        let (events, edges) = MockEdges::new();
        let (led, output) = MockOutput::new(17);
        let mut monitor = PressMonitor::new(events, led);

        output.fail_next(1);
        edges.push(falling(27, 1)).unwrap();
        let press = monitor.poll(TIMEOUT).unwrap().unwrap();
        assert_eq!(press.count, 1);
        assert_eq!(output.writes(), 0);
    }
}
