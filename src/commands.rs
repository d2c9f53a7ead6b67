/// Available commands and autocomplete logic

#[derive(Debug, Clone)]
pub struct Command {
  pub name: &'static str,
  pub aliases: &'static [&'static str],
  pub description: &'static str,
}

/// All available commands
pub const COMMANDS: &[Command] = &[
  Command {
    name: "home",
    aliases: &["h"],
    description: "Progress overview",
  },
  Command {
    name: "tasks",
    aliases: &["t", "list"],
    description: "Browse your tasks",
  },
  Command {
    name: "new",
    aliases: &["n", "create"],
    description: "Create a task",
  },
  Command {
    name: "profile",
    aliases: &["p", "account"],
    description: "Account details",
  },
  Command {
    name: "logout",
    aliases: &["signout"],
    description: "End the session",
  },
  Command {
    name: "quit",
    aliases: &["q", "exit"],
    description: "Exit taskdeck",
  },
];

/// Get autocomplete suggestions for a given input
pub fn get_suggestions(input: &str) -> Vec<&'static Command> {
  let input_lower = input.to_lowercase();

  if input_lower.is_empty() {
    return COMMANDS.iter().collect();
  }

  let mut matches: Vec<(&Command, u32)> = Vec::new();

  for cmd in COMMANDS {
    // Exact match on name
    if cmd.name == input_lower {
      matches.push((cmd, 0)); // Highest priority
      continue;
    }

    // Exact match on alias
    if cmd.aliases.contains(&input_lower.as_str()) {
      matches.push((cmd, 1));
      continue;
    }

    // Prefix match on name
    if cmd.name.starts_with(&input_lower) {
      matches.push((cmd, 2));
      continue;
    }

    // Prefix match on alias
    if cmd.aliases.iter().any(|a| a.starts_with(&input_lower)) {
      matches.push((cmd, 3));
      continue;
    }

    // Fuzzy match (contains)
    if cmd.name.contains(&input_lower) {
      matches.push((cmd, 4));
      continue;
    }

    // Fuzzy match on alias
    if cmd.aliases.iter().any(|a| a.contains(&input_lower)) {
      matches.push((cmd, 5));
    }
  }

  // Sort by priority
  matches.sort_by_key(|(_, priority)| *priority);

  matches.into_iter().map(|(cmd, _)| cmd).collect()
}

/// Resolve an input line to the command it most plausibly means
pub fn resolve(input: &str) -> Option<&'static Command> {
  get_suggestions(input.trim()).into_iter().next()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_input_returns_all() {
    let suggestions = get_suggestions("");
    assert_eq!(suggestions.len(), COMMANDS.len());
  }

  #[test]
  fn test_exact_match() {
    let suggestions = get_suggestions("tasks");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].name, "tasks");
  }

  #[test]
  fn test_alias_match() {
    let suggestions = get_suggestions("t");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].name, "tasks");
  }

  #[test]
  fn test_prefix_match() {
    let suggestions = get_suggestions("log");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].name, "logout");
  }

  #[test]
  fn test_fuzzy_match() {
    let suggestions = get_suggestions("rofi");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].name, "profile");
  }

  #[test]
  fn test_resolve_prefers_exact_name() {
    assert_eq!(resolve("quit").unwrap().name, "quit");
    assert_eq!(resolve(" new ").unwrap().name, "new");
    assert!(resolve("zzz").is_none());
  }
}
