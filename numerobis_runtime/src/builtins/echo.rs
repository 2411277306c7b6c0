//! The `echo` builtin

use std::cell::Cell;

use crate::value::Value;

thread_local! {
    // String elements are quoted only while rendering inside a list.
    static IN_LIST: Cell<bool> = const { Cell::new(false) };
}

/// Renders a value the way `echo` prints it.
///
/// Numbers render through their unit-aware display, strings bare at the
/// top level and quoted inside lists, callables and ranges as opaque
/// placeholders.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Str(s) => {
            if IN_LIST.with(Cell::get) {
                format!("\"{s}\"")
            } else {
                s.to_string()
            }
        }
        Value::Bool(b) => String::from(if *b { "true" } else { "false" }),
        Value::List(items) => {
            let was_in_list = IN_LIST.with(|flag| flag.replace(true));

            let mut out = String::from("[");
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&render(item));
            }
            out.push(']');

            IN_LIST.with(|flag| flag.set(was_in_list));
            out
        }
        Value::Range(_) => String::from("<Range>"),
        Value::Closure(_) => String::from("<Function>"),
        Value::ExternFn(_) => String::from("<Extern Function>"),
        Value::None => String::from("None"),
    }
}

/// Prints a value to stdout.
///
/// The first argument is the value (a missing value prints as the empty
/// string); the optional second argument replaces the trailing newline.
pub fn echo(args: &[Value]) -> Value {
    let value = args.first().cloned().unwrap_or_else(|| Value::str(""));
    print!("{}", render(&value));

    match args.get(1) {
        Some(Value::Str(end)) => print!("{end}"),
        _ => println!(),
    }

    Value::None
}
