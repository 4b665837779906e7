use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Div,
    Add,
    Sub,
    LT,
    GT,
    LE,
    GE,
    EQ,
    NE,
}

impl BinaryOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::LT  => "<",
            Self::GT  => ">",
            Self::LE  => "<=",
            Self::GE  => ">=",
            Self::EQ  => "==",
            Self::NE  => "!=",
        }
    }

    pub const fn precedence(&self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Product,
            Self::Add | Self::Sub => Precedence::Sum,

            Self::LT | Self::GT
            | Self::LE | Self::GE => Precedence::LessGreater,

            Self::EQ | Self::NE => Precedence::Equals,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}


// Binding power for expression parsing. All binary operators are
// left-associative, which falls out of requiring a *strictly* higher
// precedence to continue an infix chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,       // == !=
    LessGreater,  // < > <= >=
    Sum,          // + -
    Product,      // * /
    Prefix,       // -x !x
    Call,         // func(...)
}
