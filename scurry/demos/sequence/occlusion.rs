use std::sync::Arc;

use scurry::animations::{Character, Completion, Easing, Sequence, SequenceConfig};
use scurry::mocks::stage::MockStage;
use scurry::pause;
use scurry::stage::TargetAnchor;
use scurry::utils::{Range, Rect};

#[scurry::runtime]
async fn main() {
    // Characters dip behind the logo while they cross it, then freeze where they land.
    let logo = Rect::new(540.0, 20.0, 740.0, 180.0);
    let stage = Arc::new(MockStage::default().with_anchor(".site-logo", logo));

    let mut sequence = Sequence::new(stage.clone())
        .set_config(SequenceConfig {
            initial_delay: 500,
            stagger: 250,
            duration: Range::from([2000, 3000]),
            easing: Easing::QuadInOut,
            target: TargetAnchor::Selector(String::from(".site-logo")),
            occlusion: Some(String::from(".site-logo")),
            completion: Completion::Freeze,
            ..Default::default()
        })
        .with_character(Character::new("images/fox.png").set_lane(-40.0))
        .with_character(Character::new("images/hare.png").set_lane(40.0));

    sequence.start();
    pause!(4500);

    for runner in sequence.get_runners() {
        let id = runner.get_sprite().get_id();
        let occluded = stage
            .frames_for(id)
            .iter()
            .filter(|state| state.opacity == 0.0)
            .count();
        println!(
            "{}: {} frames rendered, {} behind the logo",
            runner.get_sprite(),
            stage.frames_for(id).len(),
            occluded
        );
    }
}
