use crate::token::Op;
use std::collections::HashMap;

lazy_static! {
    /// Every operator word the language knows, keyed by its spelling.
    /// Built once at first use and never mutated afterwards; precedence
    /// ranks live on [`Op`](enum.Op.html) itself.
    pub static ref OPERATORS: HashMap<String, Op> = {
        let mut map = HashMap::<String, Op>::new();
        map.insert("AND".into(), Op::And);
        map.insert("OR".into(), Op::Or);
        map.insert("NOT".into(), Op::Not);
        map.insert("NAND".into(), Op::Nand);
        map.insert("NOR".into(), Op::Nor);
        map.insert("XOR".into(), Op::Xor);
        map.shrink_to_fit();
        map
    };
}
