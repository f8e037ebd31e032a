/// Binary operators supported in expressions.
///
/// Every operator has a precedence rank; higher ranks bind tighter. All
/// comparison operators share the lowest rank, so `a + 1 < b * 2` compares
/// the two arithmetic results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always a true (non-truncating) division.
    Div,
    /// `%`
    Mod,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl BinaryOperator {
    /// Returns the precedence rank of the operator.
    ///
    /// # Example
    /// ```
    /// use blockscript::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Sub.precedence() > BinaryOperator::Less.precedence());
    /// assert_eq!(BinaryOperator::Equal.precedence(), BinaryOperator::Greater.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 2,
            Self::Equal
            | Self::NotEqual
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Less
            | Self::Greater => 1,
        }
    }

    /// Returns `true` for the relational and equality operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        self.precedence() == 1
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
        };
        write!(f, "{symbol}")
    }
}

/// One classified source line.
///
/// The executor walks raw program text, so a `Command` borrows its arguments
/// straight from the line it was read from. Keywords are case-sensitive and
/// must be the first whitespace-separated word of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// An empty or whitespace-only line.
    Blank,
    /// `ASSIGN <name> = <value>`
    Assign {
        /// Name of the variable being assigned.
        name:  &'a str,
        /// Right hand side: a quoted string, an integer literal or an
        /// expression.
        value: &'a str,
    },
    /// `PRINT <name>`
    Print {
        /// Name of the variable to print; empty for a bare `PRINT`.
        name: &'a str,
    },
    /// `START_IF <condition>`
    StartIf {
        /// The condition expression.
        condition: &'a str,
    },
    /// `END_IF`
    EndIf,
    /// `START_ELSE`
    StartElse,
    /// `END_ELSE`
    EndElse,
    /// `START_WHILE <condition>`
    StartWhile {
        /// The loop condition, re-evaluated before every iteration.
        condition: &'a str,
    },
    /// `END_WHILE`
    EndWhile,
    /// `START_FOR <var> FROM <a> TO <b> BY <c>`
    StartFor {
        /// Everything after the keyword, parsed by the executor.
        header: &'a str,
    },
    /// `END_FOR`
    EndFor,
    /// `EASTER_EGG`
    EasterEgg,
    /// Anything else; carries the whole trimmed line.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a single source line.
    ///
    /// # Example
    /// ```
    /// use blockscript::ast::Command;
    ///
    /// assert_eq!(Command::parse("  ASSIGN x = 1 + 2"),
    ///            Command::Assign { name:  "x",
    ///                              value: "1 + 2", });
    /// assert_eq!(Command::parse("START_WHILE n > 0"),
    ///            Command::StartWhile { condition: "n > 0" });
    /// assert_eq!(Command::parse("END_FOR"), Command::EndFor);
    /// assert_eq!(Command::parse("GOTO 10"), Command::Unknown("GOTO 10"));
    /// assert_eq!(Command::parse("   "), Command::Blank);
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Blank;
        }

        let (keyword, rest) = line.split_once(char::is_whitespace)
                                  .map_or((line, ""), |(k, r)| (k, r.trim()));

        match (keyword, rest.is_empty()) {
            ("ASSIGN", false) => match rest.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    Self::Assign { name:  name.trim(),
                                   value: value.trim(), }
                },
                _ => Self::Unknown(line),
            },
            ("PRINT", _) => Self::Print { name: rest },
            ("START_IF", _) => Self::StartIf { condition: rest },
            ("START_WHILE", _) => Self::StartWhile { condition: rest },
            ("START_FOR", _) => Self::StartFor { header: rest },
            ("START_ELSE", _) => Self::StartElse,
            ("END_IF", true) => Self::EndIf,
            ("END_ELSE", true) => Self::EndElse,
            ("END_WHILE", true) => Self::EndWhile,
            ("END_FOR", true) => Self::EndFor,
            ("EASTER_EGG", true) => Self::EasterEgg,
            _ => Self::Unknown(line),
        }
    }
}
