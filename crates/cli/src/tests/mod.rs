mod common;


use super::*;
