use serde::Serialize;

/// A named demo program for the playground's example picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub code: &'static str,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        name: "Basic Arithmetic",
        code: "\
// Basic arithmetic operations
let x = 10 + 5;
let y = x * 2;
print(x);
print(y);
",
    },
    Example {
        name: "Complex Expressions",
        code: "\
// Complex expressions with parentheses
let a = 5;
let b = 10;
let c = (a + b) * 2;
let d = c / 3;
print(a);
print(b);
print(c);
print(d);
",
    },
    Example {
        name: "Operator Precedence",
        code: "\
// Demonstrating operator precedence
let result1 = 2 + 3 * 4;
print(result1); // 14, not 20

let result2 = (2 + 3) * 4;
print(result2); // 20
",
    },
    Example {
        name: "Variable References",
        code: "\
// Using variables in expressions
let num1 = 100;
let num2 = 50;
let sum = num1 + num2;
let diff = num1 - num2;
let product = num1 * num2;
let quotient = num1 / num2;

print(sum);
print(diff);
print(product);
print(quotient);
",
    },
    Example {
        name: "Nested Expressions",
        code: "\
// Nested expressions
let x = 10;
let y = 20;
let z = 30;
let result = (x + y) * z - (x * y) / z;
print(result);
",
    },
];

#[cfg(test)]
mod tests {
    use crate::run;

    #[test]
    fn every_bundled_example_runs() {
        for example in super::EXAMPLES {
            let result = run(example.code);
            assert!(
                result.is_ok(),
                "example '{}' failed: {:?}",
                example.name,
                result
            );
        }
    }
}
