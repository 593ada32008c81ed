#![allow(dead_code)]

/// Three generations: Kari, her parents Ola and Anne, and two grandparents
/// (Ola's mother Berit, Anne's father Per). Ola's father and Anne's mother
/// are unknown.
pub const THREE_GENERATIONS: &str = "\
0 HEAD
1 CHAR UTF-8
0 @I1@ INDI
1 NAME Kari /Nordmann/
1 SEX F
1 BIRT
2 DATE 1 MAR 1950
2 PLAC Bergen
0 @I2@ INDI
1 NAME Ola /Nordmann/
1 BIRT
2 DATE 1920
1 DEAT
2 DATE 1990
0 @I3@ INDI
1 NAME Anne /Hansen/
0 @I4@ INDI
1 NAME Berit /Lie/
0 @I5@ INDI
1 NAME Per /Hansen/
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I3@
1 CHIL @I1@
0 @F2@ FAM
1 WIFE @I4@
1 CHIL @I2@
0 @F3@ FAM
1 HUSB @I5@
1 CHIL @I3@
0 TRLR
";

/// Cousin marriage: Gunnar is the paternal grandfather along both lines.
pub const PEDIGREE_COLLAPSE: &str = "\
0 @C@ INDI
1 NAME Child /Berg/
0 @F@ INDI
1 NAME Father /Berg/
0 @M@ INDI
1 NAME Mother /Berg/
0 @G@ INDI
1 NAME Gunnar /Berg/
0 @FAM1@ FAM
1 HUSB @F@
1 WIFE @M@
1 CHIL @C@
0 @FAM2@ FAM
1 HUSB @G@
1 CHIL @F@
1 CHIL @M@
";

/// The two-person sample without family records.
pub const JOHN_AND_JANE: &str = "\
0 @I1@ INDI
1 NAME John /Doe/
1 BIRT
2 DATE 1 JAN 1900
1 DEAT
2 DATE 1 DEC 1970
0 @I2@ INDI
1 NAME Jane /Smith/
1 BIRT
2 DATE 1 FEB 1910";
