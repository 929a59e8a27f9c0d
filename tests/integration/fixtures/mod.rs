// Documentation trees in the JSON form the CLI and reader accept
// WHY: fixed inputs keep CLI and reader tests deterministic

/// Finalized manual page with distinct sections
pub const CLEAN_DOCUMENT: &str = r#"{
  "children": [
    {"command": "head1", "content": "NAME", "children": [{"content": "sectionguard - unique sections"}]},
    {"command": "head1", "content": "SYNOPSIS"},
    {"command": "head2", "content": "SYNOPSIS"},
    {"command": "head1", "content": "DESCRIPTION"}
  ]
}"#;

/// Manual text plus generated sections that collide after normalization
pub const DUPLICATED_DOCUMENT: &str = r#"{
  "children": [
    {"command": "head1", "content": "NAME"},
    {"command": "head1", "content": "AUTHOR"},
    {"command": "head1", "content": "COPYRIGHT AND LICENSE"},
    {"command": "head1", "content": "Authors"},
    {"command": "head1", "content": "License and Copyright"}
  ]
}"#;

/// Duplicates that only match in lax mode
pub const PLURAL_DOCUMENT: &str = r#"{
  "children": [
    {"command": "head1", "content": "AUTHOR"},
    {"command": "head1", "content": "AUTHORS"}
  ]
}"#;
