//! Junction (loop) definition.

use std::fmt;
use itertools::Itertools;
use serde::Serialize;

use crate::HelixId;
use crate::Location;


/// Index of a junction inside its `SecondaryStructure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JunctionId(pub usize);

/// Loop classification by the number of sequence segments (blocks) the
/// loop is made of, i.e. the number of helices it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JunctionType {
    ApicalLoop,
    InnerLoop,
    ThreeWay,
    FourWay,
    FiveWay,
    SixWay,
    SevenWay,
    EightWay,
    NineWay,
    TenWay,
    ElevenWay,
    TwelveWay,
    ThirteenWay,
    FourteenWay,
    FifteenWay,
    SixteenWay,
    Flower,
}

impl JunctionType {
    pub fn from_block_count(blocks: usize) -> Self {
        use JunctionType::*;
        match blocks {
            0 | 1 => ApicalLoop,
            2 => InnerLoop,
            3 => ThreeWay,
            4 => FourWay,
            5 => FiveWay,
            6 => SixWay,
            7 => SevenWay,
            8 => EightWay,
            9 => NineWay,
            10 => TenWay,
            11 => ElevenWay,
            12 => TwelveWay,
            13 => ThirteenWay,
            14 => FourteenWay,
            15 => FifteenWay,
            16 => SixteenWay,
            _ => Flower,
        }
    }
}

/// A loop: the unpaired positions between helices, plus the boundary
/// positions of the helices that close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Junction {
    name: String,
    location: Location,
    helices_linked: Vec<HelixId>,
}

impl Junction {
    pub fn new(name: impl Into<String>, location: Location, helices_linked: Vec<HelixId>) -> Self {
        Junction {
            name: name.into(),
            location,
            helices_linked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Helices in the order the loop walk met them.
    pub fn helices_linked(&self) -> &[HelixId] {
        &self.helices_linked
    }

    pub fn length(&self) -> usize {
        self.location.length()
    }

    pub fn junction_type(&self) -> JunctionType {
        JunctionType::from_block_count(self.location.blocks().len())
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {} [{}]",
            self.name,
            self.junction_type(),
            self.location,
            self.helices_linked.iter().map(|h| h.0).join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_blocks() {
        assert_eq!(JunctionType::from_block_count(1), JunctionType::ApicalLoop);
        assert_eq!(JunctionType::from_block_count(2), JunctionType::InnerLoop);
        assert_eq!(JunctionType::from_block_count(3), JunctionType::ThreeWay);
        assert_eq!(JunctionType::from_block_count(16), JunctionType::SixteenWay);
        assert_eq!(JunctionType::from_block_count(17), JunctionType::Flower);
        assert_eq!(JunctionType::from_block_count(40), JunctionType::Flower);
    }

    #[test]
    fn test_junction_accessors() {
        let loc: Location = "2-5,11-14".parse().unwrap();
        let j = Junction::new("J1", loc, vec![HelixId(1), HelixId(0)]);
        assert_eq!(j.junction_type(), JunctionType::InnerLoop);
        assert_eq!(j.length(), 8);
        assert_eq!(j.helices_linked(), &[HelixId(1), HelixId(0)]);
        assert_eq!(j.to_string(), "J1 InnerLoop 2-5,11-14 [1,0]");
    }
}
