#![allow(dead_code)]

use oxide_delta_core::{Mutation, MutationRecord};

pub fn classify(sql: &str) -> MutationRecord {
    oxide_delta_postgres::classify_first(sql)
}

pub fn mutation(sql: &str) -> Mutation {
    match classify(sql) {
        MutationRecord::Mutation(m) => m,
        MutationRecord::NoOp => panic!("Expected a mutation for: {sql}\nGot: NoOp"),
    }
}

pub fn audit_json(sql: &str) -> serde_json::Value {
    serde_json::to_value(classify(sql))
        .unwrap_or_else(|e| panic!("Failed to serialize record for: {sql}\nError: {e:?}"))
}

pub fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
