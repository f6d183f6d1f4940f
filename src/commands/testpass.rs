use rpassgen::strength::{estimate_strength, zxcvbn_feedback};
use serde_json::json;

use crate::TestpassArgs;
use super::format_strength;

pub fn test_password(args: TestpassArgs) -> Result<(), String> {
    let result = estimate_strength(&args.password);
    let feedback = if args.feedback { zxcvbn_feedback(&args.password) } else { Vec::new() };

    if args.json {
        let mut value = json!({ "score": result.score, "label": result.label });
        if args.feedback {
            value["feedback"] = json!(feedback);
        }
        let out = serde_json::to_string_pretty(&value)
            .map_err(|e| format!("Failed to serialize output: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Password strength: {}", format_strength(&result));
    if args.feedback {
        if feedback.is_empty() {
            println!("No suggestions");
        } else {
            println!("Suggestions: {}", feedback.join(" "));
        }
    }
    Ok(())
}
