//! Floating particle layer for the hero banner

use crate::wasm_utils::sleep_ms;
use dioxus::prelude::*;
use folio_common::{ParticleConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Absolutely positioned particles drifting over the parent.
///
/// The tick loop is a component-scoped future: it stops when the
/// component unmounts.
#[component]
pub fn FloatingParticles(#[props(default)] config: ParticleConfig) -> Element {
    let mut field = use_signal(|| ParticleField::new(config));

    use_future(move || async move {
        let mut rng = StdRng::from_entropy();
        loop {
            field.write().tick(&mut rng);
            sleep_ms(config.tick_ms).await;
        }
    });

    rsx! {
        div { class: "absolute inset-0 pointer-events-none z-[1]", aria_hidden: "true",
            for particle in field.read().particles().iter() {
                div {
                    key: "{particle.id}",
                    class: "floating-particle",
                    style: "{particle.style()}",
                }
            }
        }
    }
}
