use std::sync::Arc;

use tracing::{debug, warn};

use crate::spell::SpellDefinition;

use super::{ModifierProvider, SpellAmountContext};

/// Ordered list of modifier providers.
///
/// Providers run in registration order; discovery (component scans, plugin
/// loading) happens at the composition root, which registers what it found.
#[derive(Clone, Default)]
pub struct ModifierRegistry {
    providers: Vec<Arc<dyn ModifierProvider>>,
}

impl ModifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider to the end of the chain.
    pub fn register(&mut self, provider: Arc<dyn ModifierProvider>) {
        self.providers.push(provider);
    }

    /// Builder form of [`ModifierRegistry::register`].
    pub fn with(mut self, provider: impl ModifierProvider + 'static) -> Self {
        self.register(Arc::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns provider names in invocation order (for debugging).
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.providers.iter().map(|p| p.name())
    }

    /// Runs every matching provider over `ctx`.
    ///
    /// Each provider works on a scratch copy; the copy is committed (and
    /// clamped) only when the provider succeeds, so a failing provider leaves
    /// the amount as of the last successful one.
    pub(super) fn apply(&self, spell: &SpellDefinition, ctx: &mut SpellAmountContext) {
        for provider in &self.providers {
            if provider.filter().is_some_and(|filter| !filter.matches(spell)) {
                continue;
            }

            let mut scratch = *ctx;
            match provider.modify_spell_amount(spell, &mut scratch) {
                Ok(()) => {
                    scratch.clamp();
                    debug!(
                        spell = %spell.id,
                        provider = provider.name(),
                        before = ctx.amount,
                        after = scratch.amount,
                        "modifier applied"
                    );
                    *ctx = scratch;
                }
                Err(err) => {
                    warn!(
                        spell = %spell.id,
                        provider = provider.name(),
                        error = %err,
                        "modifier provider failed; skipping"
                    );
                }
            }
        }
    }
}

impl core::fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
