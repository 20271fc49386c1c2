mod tests {
    use std::thread;

    use gpio_softpwm::{DutyCell, DutyCycle, DutyHandle};

    #[test]
    fn test_clamped() {
        assert_eq!(DutyCycle::clamped(-5), DutyCycle::OFF);
        assert_eq!(DutyCycle::clamped(150), DutyCycle::FULL);
        assert_eq!(DutyCycle::clamped(0).percent(), 0);
        assert_eq!(DutyCycle::clamped(42).percent(), 42);
        assert_eq!(DutyCycle::clamped(100).percent(), 100);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(DutyCycle::new(100), Some(DutyCycle::FULL));
        assert_eq!(DutyCycle::new(101), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DutyCycle::clamped(25).to_string(), "25%");
    }

    #[test]
    fn test_set_duty_cycle_clamps() {
        let duty = DutyHandle::new(DutyCycle::OFF);
        assert_eq!(duty.set_duty_cycle(-5), DutyCycle::OFF);
        assert_eq!(duty.duty_cycle(), DutyCycle::OFF);
        assert_eq!(duty.set_duty_cycle(150), DutyCycle::FULL);
        assert_eq!(duty.duty_cycle(), DutyCycle::FULL);
    }

    #[test]
    fn test_last_write_wins() {
        let duty = DutyHandle::default();
        let other = duty.clone();
        duty.set_duty_cycle(10);
        other.set_duty_cycle(20);
        duty.set_duty_cycle(30);
        assert_eq!(other.duty_cycle().percent(), 30);
    }

    #[test]
    fn test_cell_concurrent_writers() {
        let duty = DutyHandle::new(DutyCycle::OFF);
        let writers: Vec<_> = (0..4)
            .map(|i| {
                let duty = duty.clone();
                thread::spawn(move || {
                    for value in -50..150 {
                        duty.set_duty_cycle(value + i);
                    }
                })
            })
            .collect();

        for _ in 0..1_000 {
            assert!(duty.duty_cycle().percent() <= DutyCycle::MAX_PERCENT);
        }
        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(duty.duty_cycle(), DutyCycle::FULL);
    }

    #[test]
    fn test_cell_store_and_get() {
        let cell = DutyCell::default();
        assert_eq!(cell.get(), DutyCycle::OFF);
        cell.store(DutyCycle::clamped(75));
        assert_eq!(cell.get().percent(), 75);
        assert_eq!(cell.set(101), DutyCycle::FULL);
    }
}
