use crate::ir::{Label, Var};

/// Fresh-name state for one compilation. Temporaries and labels each
/// draw from their own monotonic counter, threaded through lowering as
/// an explicit value rather than a module-level static, so lowering
/// stays deterministic and re-entrant.
#[derive(Default)]
pub struct NameGen {
    next_temp: u32,
    next_label: u32,
}

impl NameGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_var(&mut self) -> Var {
        self.next_temp += 1;
        Var(format!("tmp.{}", self.next_temp))
    }

    /// `prefix` namespaces the label by the construct that introduced
    /// it (e.g. `"and_false"`, `"or_end"`); the counter itself is
    /// shared across all prefixes so every label is globally unique.
    pub fn fresh_label(&mut self, prefix: &str) -> Label {
        self.next_label += 1;
        Label(format!("{prefix}.{}", self.next_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_and_labels_are_unique_across_calls() {
        let mut gen = NameGen::new();
        let a = gen.fresh_var();
        let b = gen.fresh_var();
        assert_ne!(a, b);
        let l1 = gen.fresh_label("and_false");
        let l2 = gen.fresh_label("and_end");
        assert_ne!(l1, l2);
    }
}
