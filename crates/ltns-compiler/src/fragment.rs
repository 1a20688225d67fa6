//! Compiled fragments: preparatory steps plus a value.

use rhizome_ltns_ir::{Expr, Program, Stmt};

/// Ordered steps followed by a value.
///
/// Composing fragments always keeps steps in source order: the steps of
/// anything evaluated earlier come first. A fragment with no steps is pure
/// and its value can be embedded anywhere an expression is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<T = Expr> {
    pub steps: Vec<Stmt>,
    pub value: T,
}

impl<T> Fragment<T> {
    /// Lift a value with no steps.
    pub fn pure(value: T) -> Self {
        Self {
            steps: Vec::new(),
            value,
        }
    }

    pub fn new(steps: Vec<Stmt>, value: T) -> Self {
        Self { steps, value }
    }

    pub fn is_pure(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Stmt>, T) {
        (self.steps, self.value)
    }

    /// Transform the value, keeping the steps.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fragment<U> {
        Fragment {
            steps: self.steps,
            value: f(self.value),
        }
    }

    /// Feed the value into `f`; the steps of `f`'s fragment run after ours.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Fragment<U>) -> Fragment<U> {
        let mut steps = self.steps;
        let next = f(self.value);
        steps.extend(next.steps);
        Fragment {
            steps,
            value: next.value,
        }
    }

    /// Pair two values; our steps run first.
    pub fn zip<U>(self, other: Fragment<U>) -> Fragment<(T, U)> {
        self.and_then(|left| other.map(|right| (left, right)))
    }

    /// Concatenate the steps of all fragments in order and collect their values.
    pub fn collect(fragments: impl IntoIterator<Item = Fragment<T>>) -> Fragment<Vec<T>> {
        let mut steps = Vec::new();
        let mut values = Vec::new();
        for fragment in fragments {
            steps.extend(fragment.steps);
            values.push(fragment.value);
        }
        Fragment::new(steps, values)
    }
}

impl Fragment<Expr> {
    /// The steps followed by evaluating the value for effect.
    pub fn into_statements(self) -> Vec<Stmt> {
        let mut steps = self.steps;
        steps.push(Stmt::Expr(self.value));
        steps
    }

    /// Sequence: run this fragment for effect, then `next`.
    pub fn then(self, next: Fragment) -> Fragment {
        let mut steps = self.into_statements();
        steps.extend(next.steps);
        Fragment::new(steps, next.value)
    }

    /// Finalize into a program that evaluates the value as its last step.
    pub fn into_program(self) -> Program {
        Program::new(self.into_statements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(name: &str) -> Stmt {
        Stmt::Expr(Expr::call(Expr::name(name), vec![]))
    }

    #[test]
    fn test_pure() {
        let fragment = Fragment::pure(Expr::Int(1));
        assert!(fragment.is_pure());
        assert_eq!(fragment.value, Expr::Int(1));
    }

    #[test]
    fn test_map_keeps_steps() {
        let fragment = Fragment::new(vec![effect("a")], 1).map(|n| n + 1);
        assert_eq!(fragment, Fragment::new(vec![effect("a")], 2));
    }

    #[test]
    fn test_and_then_orders_steps() {
        let fragment = Fragment::new(vec![effect("a")], 1)
            .and_then(|n| Fragment::new(vec![effect("b")], n * 10));
        assert_eq!(fragment.steps, vec![effect("a"), effect("b")]);
        assert_eq!(fragment.value, 10);
    }

    #[test]
    fn test_zip_orders_steps() {
        let left = Fragment::new(vec![effect("left")], "l");
        let right = Fragment::new(vec![effect("right")], "r");
        let fragment = left.zip(right);
        assert_eq!(fragment.steps, vec![effect("left"), effect("right")]);
        assert_eq!(fragment.value, ("l", "r"));
    }

    #[test]
    fn test_collect() {
        let fragment = Fragment::collect(vec![
            Fragment::new(vec![effect("a")], 1),
            Fragment::pure(2),
            Fragment::new(vec![effect("c")], 3),
        ]);
        assert_eq!(fragment.steps, vec![effect("a"), effect("c")]);
        assert_eq!(fragment.value, vec![1, 2, 3]);

        let empty = Fragment::<i32>::collect(vec![]);
        assert!(empty.is_pure());
        assert!(empty.value.is_empty());
    }

    #[test]
    fn test_then_discards_first_value() {
        let first = Fragment::new(vec![effect("a")], Expr::name("x"));
        let second = Fragment::new(vec![effect("b")], Expr::name("y"));
        let fragment = first.then(second);
        assert_eq!(
            fragment.steps,
            vec![effect("a"), Stmt::Expr(Expr::name("x")), effect("b")]
        );
        assert_eq!(fragment.value, Expr::name("y"));
    }

    #[test]
    fn test_into_program() {
        let program = Fragment::new(vec![effect("a")], Expr::Int(1)).into_program();
        assert_eq!(program.body, vec![effect("a"), Stmt::Expr(Expr::Int(1))]);
    }
}
