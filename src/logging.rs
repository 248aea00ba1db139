//! Announcing wrapper around the timing functions.
//!
//! A [`Logged`] value pairs a timing operation with an output format.
//! Calling it computes the duration, prints one line, and returns the
//! duration; [`Logged::quiet`] skips the print for callers that only
//! want the number. The default format is `<name> - <minutes> мин!`;
//! a custom template substitutes the duration into its `{}` placeholder.

use rand::RngCore;
use tracing::debug;

use crate::catalog::Pizza;
use crate::timing;

/// A timing operation with an attached announcement format.
pub struct Logged<F> {
    name: &'static str,
    template: Option<String>,
    func: F,
}

impl<F> Logged<F>
where
    F: Fn(&mut dyn RngCore, &Pizza) -> u32,
{
    /// Wraps `func` with the default `<name> - <minutes> мин!` format.
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            name,
            template: None,
            func,
        }
    }

    /// Wraps `func` with a custom announcement template. The template's
    /// first `{}` is replaced with the computed duration.
    pub fn with_template(template: impl Into<String>, name: &'static str, func: F) -> Self {
        Self {
            name,
            template: Some(template.into()),
            func,
        }
    }

    /// Identifier of the wrapped operation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Computes the duration without any output.
    pub fn quiet(&self, rng: &mut dyn RngCore, pizza: &Pizza) -> u32 {
        (self.func)(rng, pizza)
    }

    /// Formats the announcement line for a known duration.
    pub fn render(&self, minutes: u32) -> String {
        match &self.template {
            Some(template) => template.replacen("{}", &minutes.to_string(), 1),
            None => format!("{} - {} мин!", self.name, minutes),
        }
    }

    /// Computes the duration, announces it on stdout, and returns it.
    pub fn call(&self, rng: &mut dyn RngCore, pizza: &Pizza) -> u32 {
        let minutes = self.quiet(rng, pizza);
        debug!(operation = self.name, minutes, "timing computed");
        println!("{}", self.render(minutes));
        minutes
    }
}

/// Baking announced in the default format, e.g. `bake - 9 мин!`.
pub fn bake() -> Logged<impl Fn(&mut dyn RngCore, &Pizza) -> u32> {
    Logged::new("bake", |rng: &mut dyn RngCore, pizza: &Pizza| {
        timing::baking_time(rng, pizza)
    })
}

/// Delivery announced as `🚚Доставили за N мин!`.
pub fn delivery() -> Logged<impl Fn(&mut dyn RngCore, &Pizza) -> u32> {
    Logged::with_template(
        "\u{1F69A}Доставили за {} мин!",
        "delivery",
        |rng: &mut dyn RngCore, _pizza: &Pizza| timing::delivery_time(rng),
    )
}

/// Self-service pickup announced as `🏠Забрали за N мин!`.
pub fn pickup() -> Logged<impl Fn(&mut dyn RngCore, &Pizza) -> u32> {
    Logged::with_template(
        "\u{1F3E0}Забрали за {} мин!",
        "pickup",
        |rng: &mut dyn RngCore, _pizza: &Pizza| timing::pickup_time(rng),
    )
}
