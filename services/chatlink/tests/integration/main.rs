mod helpers;

mod link_test;
