/// Section header an issue form renders above the address field.
pub const PUBLIC_ADDRESS_HEADER: &str = "### Public Address";

/// Header, optional trailing whitespace or blank lines, then the token.
///
/// Issue forms render `### Public Address\n\n<value>`, so the whitespace
/// run before the final newline has to absorb the empty line.
pub const PUBLIC_ADDRESS_PATTERN: &str = r"### Public Address\s*\n([A-Za-z0-9]+)";

/// Value emitted when the body carries no address.
pub const NOT_FOUND: &str = "No address found";

/// Key the CI step binds the result to.
pub const DEFAULT_OUTPUT_KEY: &str = "address";
