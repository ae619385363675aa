use crate::inventory::Item;
use serde_json::{Value, json};

pub const SCHEMA_NAME: &str = "inventory_command";

const INSTRUCTIONS: &str = r#"You are an intelligent assistant that converts natural language inventory requests into structured JSON commands for an Inventory Management System.
The inventory system manages only two items: 'tshirts' and 'pants'.

Your task is to determine the 'operation' (READ, WRITE or UNSUPPORTED), the 'item' (if applicable), and the 'change' amount (if applicable) based on the user's query.
If the operation is 'READ', 'change' must be null. 'item' is null unless the user asks about one specific item.
If the operation is 'WRITE', 'item' and 'change' are required. Selling or removing stock is a negative change, adding or receiving stock is a positive change.
If the query is about anything other than the stock of tshirts and pants, the operation is 'UNSUPPORTED' and 'item' and 'change' must be null.
Always provide a 'reasoning' for your decision.

Here are some examples:

User Query: "I sold 3 t shirts"
JSON Response: {"operation": "WRITE", "item": "tshirts", "change": -3, "reasoning": "User indicates selling, which means reducing stock. Item is 'tshirts', amount is 3."}

User Query: "Add 5 pants"
JSON Response: {"operation": "WRITE", "item": "pants", "change": 5, "reasoning": "User indicates adding stock. Item is 'pants', amount is 5."}

User Query: "How many pants and shirts do I have?"
JSON Response: {"operation": "READ", "item": null, "change": null, "reasoning": "User is asking for current stock levels, which is a READ operation."}

User Query: "What's the stock of tshirts?"
JSON Response: {"operation": "READ", "item": "tshirts", "change": null, "reasoning": "User is asking for the stock of a specific item, which is a READ operation."}

User Query: "Increase tshirts by 10"
JSON Response: {"operation": "WRITE", "item": "tshirts", "change": 10, "reasoning": "User wants to increase stock. Item is 'tshirts', amount is 10."}

User Query: "Reduce pants by 2"
JSON Response: {"operation": "WRITE", "item": "pants", "change": -2, "reasoning": "User wants to reduce stock. Item is 'pants', amount is 2."}

User Query: "I bought 4 hats"
JSON Response: {"operation": "UNSUPPORTED", "item": null, "change": null, "reasoning": "Hats are not tracked by the inventory system."}

User Query: "Check inventory"
JSON Response: {"operation": "READ", "item": null, "change": null, "reasoning": "User is asking for general inventory status, which is a READ operation."}
"#;

/// Full prompt for one query: the fixed instructions followed by the
/// caller's text.
pub fn build_prompt(query: &str) -> String {
    format!(
        "{}\nUser Query: {:?}\nJSON Response:\n",
        INSTRUCTIONS,
        query.trim()
    )
}

/// Shape the model's reply is constrained to.
pub fn response_schema() -> Value {
    let items: Vec<&str> = Item::ALL.iter().map(Item::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "operation": {"type": "STRING", "enum": ["READ", "WRITE", "UNSUPPORTED"]},
            "item": {"type": "STRING", "enum": items, "nullable": true},
            "change": {"type": "INTEGER", "nullable": true},
            "reasoning": {"type": "STRING"}
        },
        "required": ["operation", "reasoning"]
    })
}
