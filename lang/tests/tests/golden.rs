use adtc_tests::golden;

golden!(option, "option");
golden!(foobar, "foobar");
golden!(user, "user");
golden!(either, "either", adtc_driver::Options::default().with_accessors(false).with_equality(false));
