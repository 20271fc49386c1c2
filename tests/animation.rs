mod tests {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    use gpio_softpwm::animation::{Breathing, ManualLevel, SineWave, Strobe};
    use gpio_softpwm::{Animation, AnimationConfig, AnimationId, AnimationSet, DutyCycle};

    fn percents(animation: &mut impl Animation, steps: usize) -> Vec<u8> {
        (0..steps).map(|_| animation.next_duty().percent()).collect()
    }

    #[test]
    fn test_manual_holds_level() {
        let mut manual = ManualLevel::new(DutyCycle::clamped(50));
        assert_eq!(percents(&mut manual, 3), [50, 50, 50]);
        assert_eq!(manual.set_level(250), DutyCycle::FULL);
        assert_eq!(manual.next_duty(), DutyCycle::FULL);
    }

    #[test]
    fn test_breathing_bounces() {
        let mut breathing = Breathing::new(2);

        let rising = percents(&mut breathing, 50);
        let expected: Vec<u8> = (1..=50).map(|i| i * 2).collect();
        assert_eq!(rising, expected);
        assert!(!breathing.is_rising());

        let falling = percents(&mut breathing, 50);
        let expected: Vec<u8> = (0..50).rev().map(|i| i * 2).collect();
        assert_eq!(falling, expected);
        assert!(breathing.is_rising());

        assert_eq!(percents(&mut breathing, 2), [2, 4]);
    }

    #[test]
    fn test_breathing_uneven_step_clamps() {
        let mut breathing = Breathing::new(30);
        assert_eq!(percents(&mut breathing, 8), [30, 60, 90, 100, 70, 40, 10, 0]);
    }

    #[test]
    fn test_breathing_reset() {
        let mut breathing = Breathing::new(2);
        percents(&mut breathing, 10);
        breathing.reset();
        assert_eq!(breathing.brightness(), DutyCycle::OFF);
        assert_eq!(breathing.next_duty().percent(), 2);
    }

    #[test]
    fn test_sine_duty_at() {
        assert_eq!(SineWave::duty_at(0.0).percent(), 50);
        assert_eq!(SineWave::duty_at(FRAC_PI_2).percent(), 100);
        assert_eq!(SineWave::duty_at(PI).percent(), 50);
        assert_eq!(SineWave::duty_at(3.0 * FRAC_PI_2).percent(), 0);
    }

    #[test]
    fn test_sine_starts_at_midpoint() {
        let mut sine = SineWave::new(0.1);
        assert_eq!(sine.next_duty().percent(), 50);
        assert!(sine.next_duty().percent() > 50);
    }

    #[test]
    fn test_sine_phase_wraps() {
        let mut sine = SineWave::new(0.1);
        for _ in 0..10_000 {
            sine.next_duty();
            assert!(sine.phase() >= 0.0 && sine.phase() < TAU);
        }
    }

    #[test]
    fn test_sine_continuous_across_wrap() {
        let mut sine = SineWave::new(0.1);
        let mut previous = sine.next_duty().percent();
        for _ in 0..200 {
            let current = sine.next_duty().percent();
            assert!(previous.abs_diff(current) <= 6);
            previous = current;
        }
    }

    #[test]
    fn test_strobe_toggles_every_five() {
        let mut strobe = Strobe::new(5);
        assert_eq!(
            percents(&mut strobe, 15),
            [0, 0, 0, 0, 0, 100, 100, 100, 100, 100, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_strobe_zero_count_flips_every_step() {
        let mut strobe = Strobe::new(0);
        assert_eq!(percents(&mut strobe, 4), [0, 100, 0, 100]);
    }

    #[test]
    fn test_animation_id_cycle() {
        assert_eq!(AnimationId::Manual.next(), AnimationId::Breathing);
        assert_eq!(AnimationId::Breathing.next(), AnimationId::SineWave);
        assert_eq!(AnimationId::SineWave.next(), AnimationId::Strobe);
        assert_eq!(AnimationId::Strobe.next(), AnimationId::Manual);
    }

    #[test]
    fn test_animation_id_raw_and_names() {
        for id in AnimationId::ALL {
            assert_eq!(AnimationId::from_raw(id as u8), Some(id));
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(AnimationId::from_raw(4), None);
        assert_eq!(AnimationId::parse_from_str("rainbow"), None);
        assert_eq!(AnimationId::SineWave.label(), "Sine Wave");
    }

    #[test]
    fn test_set_keeps_state_per_pattern() {
        let mut set = AnimationSet::new(&AnimationConfig::default());
        set.step(AnimationId::Breathing);
        set.step(AnimationId::Breathing);
        set.step(AnimationId::Breathing);

        assert_eq!(set.step(AnimationId::Strobe), DutyCycle::OFF);
        assert_eq!(set.step(AnimationId::Manual).percent(), 50);

        assert_eq!(set.step(AnimationId::Breathing).percent(), 8);

        set.reset(AnimationId::Breathing);
        assert_eq!(set.step(AnimationId::Breathing).percent(), 2);
    }
}
