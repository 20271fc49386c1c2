mod tests {
    use gpio_softpwm::gpio::mock::MockInput;
    use gpio_softpwm::{
        AnimationConfig, AnimationId, Animator, CancelToken, DriverConfig, DutyCycle, DutyHandle,
        Instant, Level, ModeDriver,
    };

    fn animator(duty: &DutyHandle) -> Animator {
        Animator::new(
            duty.clone(),
            &AnimationConfig::default(),
            &DriverConfig::default(),
        )
    }

    #[test]
    fn test_animator_paces_steps() {
        let duty = DutyHandle::default();
        let mut animator = animator(&duty);
        animator.select(AnimationId::Breathing);

        assert_eq!(animator.tick(Instant::from_millis(0)).map(DutyCycle::percent), Some(2));
        assert_eq!(animator.tick(Instant::from_millis(5)), None);
        assert_eq!(animator.tick(Instant::from_millis(10)).map(DutyCycle::percent), Some(4));
        assert_eq!(duty.duty_cycle().percent(), 4);
    }

    #[test]
    fn test_animator_mode_labels() {
        let duty = DutyHandle::default();
        let mut animator = animator(&duty);
        assert_eq!(animator.mode(), AnimationId::Manual);
        assert_eq!(animator.mode_label(), "Manual (50%)");

        animator.animations_mut().manual_mut().set_level(80);
        assert_eq!(animator.mode_label(), "Manual (80%)");
        assert_eq!(animator.step().percent(), 80);
        assert_eq!(duty.duty_cycle().percent(), 80);

        assert_eq!(animator.cycle_mode(), AnimationId::Breathing);
        assert_eq!(animator.mode_label(), "Breathing");
    }

    #[test]
    fn test_press_cycles_mode() {
        let duty = DutyHandle::default();
        let (button, input) = MockInput::new(27, Level::High);
        let mut driver = ModeDriver::new(button, animator(&duty), &DriverConfig::default());

        assert_eq!(driver.poll(Instant::from_millis(0)), None);
        assert_eq!(duty.duty_cycle().percent(), 50);

        input.set_level(Level::Low);
        assert_eq!(driver.poll(Instant::from_millis(1)), Some(AnimationId::Breathing));
        // Held down: no repeat
        assert_eq!(driver.poll(Instant::from_millis(2)), None);
        assert_eq!(driver.poll(Instant::from_millis(3)), None);

        input.set_level(Level::High);
        assert_eq!(driver.poll(Instant::from_millis(4)), None);
        input.set_level(Level::Low);
        assert_eq!(driver.poll(Instant::from_millis(5)), Some(AnimationId::SineWave));
        assert_eq!(driver.animator().mode(), AnimationId::SineWave);
    }

    #[test]
    fn test_full_cycle_returns_to_manual() {
        let duty = DutyHandle::default();
        let (button, input) = MockInput::new(27, Level::High);
        let mut driver = ModeDriver::new(button, animator(&duty), &DriverConfig::default());

        let mut now = 0;
        for _ in 0..AnimationId::ALL.len() {
            input.set_level(Level::Low);
            driver.poll(Instant::from_millis(now));
            input.set_level(Level::High);
            driver.poll(Instant::from_millis(now + 1));
            now += 2;
        }
        assert_eq!(driver.animator().mode(), AnimationId::Manual);
    }

    #[test]
    fn test_read_failure_is_not_a_press() {
        let duty = DutyHandle::default();
        let (button, input) = MockInput::new(27, Level::High);
        let mut driver = ModeDriver::new(button, animator(&duty), &DriverConfig::default());

        input.set_failing(true);
        assert_eq!(driver.poll(Instant::from_millis(0)), None);
        assert_eq!(driver.poll(Instant::from_millis(1)), None);
        assert_eq!(driver.animator().mode(), AnimationId::Manual);

        input.set_failing(false);
        input.set_level(Level::Low);
        assert_eq!(driver.poll(Instant::from_millis(2)), Some(AnimationId::Breathing));
    }

    #[test]
    fn test_run_stops_when_cancelled() {
        let duty = DutyHandle::default();
        let (button, _input) = MockInput::new(27, Level::High);
        let mut driver = ModeDriver::new(button, animator(&duty), &DriverConfig::default());

        let cancel = CancelToken::new();
        cancel.cancel();
        driver.run(&cancel);
        assert!(cancel.is_cancelled());
    }
}
