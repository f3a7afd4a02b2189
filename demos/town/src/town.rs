//! Built-in scenario used when no map or agent file is given.
//!
//! Two walled blocks hide the Bank and the Chapel.  Homes for agents whose
//! numbers end in 1 to 4 sit on the corners.

pub const MAP: &str = "\
# town: built-in demo map
~A: Archive, 3
~B: Bank, 2
~C: Chapel, 4
~D: Depot, 1
~E: Exchange, 2
M
1        A        2
                   
   *****   *****   
   *   *   *   *   
   * B *   * C *   
   *   *   *   *   
   ** **   ** **   
                   
E       ***       D
                   
   ** **   ** **   
   *   *   *   *   
   *   *   *   *   
   *****   *****   
                   
3                 4
";

pub const AGENTS: &str = "\
1
A
C
2
B
E
3
D
11
E
B
A
12
C
4
A
D
14
B
";
