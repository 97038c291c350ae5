//! Variable bindings and collected output.


use rill_ir::Operand;
use rustc_hash::FxHashMap;

/// Execution state for one program run: variable bindings plus the
/// ordered values emitted by `print`.
///
/// There is a single flat scope. Loop variables live in the same map as
/// initialized variables and overwrite prior bindings of the same name.
#[derive(Debug, Default)]
pub struct Environment {
    variables: FxHashMap<String, i64>,
    outputs: Vec<i64>,
}

impl Environment {
    /// Empty environment: no bindings, no output.
    pub fn new() -> Environment {
        Environment::default()
    }

    /// Environment pre-populated from the trailing variable block.
    ///
    /// Names pair with value tokens positionally. A name whose token is
    /// missing or not a valid `i64` literal binds to 0; surplus value
    /// tokens are ignored; a repeated name keeps the later binding.
    pub fn with_bindings<S: AsRef<str>>(names: &[S], values: &[S]) -> Environment {
        let mut env = Environment::new();
        for (i, name) in names.iter().enumerate() {
            let value = match values.get(i).map(|v| Operand::classify(v.as_ref())) {
                Some(Operand::Int(n)) => n,
                _ => 0,
            };
            env.set(name.as_ref(), value);
        }
        env
    }

    /// Bind `name`, overwriting any existing binding.
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Value of `name`. Unbound names read as 0.
    pub fn get(&self, name: &str) -> i64 {
        self.variables.get(name).copied().unwrap_or(0)
    }

    /// Record one printed value.
    pub fn emit(&mut self, value: i64) {
        self.outputs.push(value);
    }

    /// Emitted values, in execution order.
    pub fn outputs(&self) -> &[i64] {
        &self.outputs
    }

    /// Consume the environment, keeping only the emitted values.
    pub fn into_outputs(self) -> Vec<i64> {
        self.outputs
    }
}
