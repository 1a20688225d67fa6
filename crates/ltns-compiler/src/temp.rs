//! Temporary name allocation.

/// Hands out `_temp_func_N` and `_temp_var_N` names.
///
/// Functions and variables share one counter, so no two names from the same
/// allocator ever carry the same number. Each [`crate::Compiler`] owns its
/// own allocator.
#[derive(Debug, Default)]
pub struct TempNames {
    counter: u32,
}

impl TempNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn func_name(&mut self) -> String {
        self.next("_temp_func")
    }

    pub fn var_name(&mut self) -> String {
        self.next("_temp_var")
    }

    /// Number of names handed out so far.
    pub fn allocated(&self) -> u32 {
        self.counter
    }

    fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}_{}", prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_counter() {
        let mut temps = TempNames::new();
        assert_eq!(temps.func_name(), "_temp_func_1");
        assert_eq!(temps.var_name(), "_temp_var_2");
        assert_eq!(temps.var_name(), "_temp_var_3");
        assert_eq!(temps.func_name(), "_temp_func_4");
        assert_eq!(temps.allocated(), 4);
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut first = TempNames::new();
        let mut second = TempNames::new();
        first.func_name();
        first.func_name();
        assert_eq!(second.func_name(), "_temp_func_1");
    }
}
