use std::sync::Arc;

use scurry::animations::{Easing, MotionSpec, Runner, RunnerEvent};
use scurry::mocks::stage::MockStage;
use scurry::stage::Sprite;
use scurry::utils::Point;

#[scurry::runtime]
async fn main() {
    // A mocked surface so the demo runs anywhere; swap in your own Stage implementation.
    let stage = Arc::new(MockStage::default());

    let motion = MotionSpec::new(Point::new(1400.0, 50.0), Point::new(-120.0, 50.0), 2500)
        .set_easing(Easing::CubicOut);
    let mut runner = Runner::new(stage, Sprite::new("images/fox.png"), motion);

    runner.on(RunnerEvent::OnComplete, |runner: Runner| async move {
        println!("{} finished its run", runner.get_sprite());
        Ok(())
    });

    runner.play();
}
