use crate::common::token::closed_tokens;

closed_tokens! {
    /// Connection header directive.
    pub enum Connection: InvalidHeaderValue {
        (KeepAlive, "keep-alive");
        (Close, "close");
    }
}

closed_tokens! {
    /// Expect header directive.
    pub enum Expect: InvalidHeaderValue {
        (Continue, "100-continue");
    }
}
