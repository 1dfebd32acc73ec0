//! Render a parser-produced syntax tree from its JSON form.
//!
//! Run with: `cargo run --example minify_json`

use moonpress_render::render_json;

const AST_JSON: &str = r#"{
    "type": "Chunk",
    "body": [
        {
            "type": "LocalStatement",
            "variables": [{"type": "Identifier", "name": "frames", "isLocal": true}],
            "init": [{"type": "NumericLiteral", "value": 60, "raw": "60"}]
        },
        {
            "type": "ForNumericStatement",
            "variable": {"type": "Identifier", "name": "beat", "isLocal": true},
            "start": {"type": "NumericLiteral", "value": 1, "raw": "1"},
            "end": {"type": "Identifier", "name": "frames", "isLocal": true},
            "step": null,
            "body": [{
                "type": "CallStatement",
                "expression": {
                    "type": "CallExpression",
                    "base": {"type": "Identifier", "name": "print", "isLocal": false},
                    "arguments": [{"type": "Identifier", "name": "beat", "isLocal": true}]
                }
            }]
        }
    ]
}"#;

fn main() -> Result<(), moonpress_render::Error> {
    let rendered = render_json(AST_JSON)?;
    println!("{rendered}");
    Ok(())
}
