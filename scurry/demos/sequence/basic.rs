use std::sync::Arc;

use scurry::animations::{Character, Sequence, SequenceConfig};
use scurry::mocks::stage::MockStage;
use scurry::stage::TargetAnchor;
use scurry::utils::Rect;

#[scurry::runtime]
async fn main() {
    // A pretend page with a logo banner at the top.
    let stage = Arc::new(
        MockStage::default().with_anchor(".site-logo", Rect::new(540.0, 40.0, 740.0, 140.0)),
    );

    let mut sequence = Sequence::new(stage)
        .set_config(SequenceConfig {
            initial_delay: 1000,
            target: TargetAnchor::Selector(String::from(".site-logo")),
            ..Default::default()
        })
        .with_character(Character::new("images/fox.png").set_lane(-40.0))
        .with_character(Character::new("images/hare.png"))
        .with_character(Character::new("images/hedgehog.png").set_lane(40.0));

    println!("{}", sequence);
    sequence.start();
}
