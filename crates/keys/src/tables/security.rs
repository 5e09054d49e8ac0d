key_table! {
    /// Kinds of security principal (`SecurityUser.userClass`).
    pub struct UserClassKeys {
        APPLICATION_USER = "ApplicationUser" => "e9cd4dad-2759-4022-ab07-92fcfb236a98",
        HUMAN_USER = "HumanUser" => "33932b42-6f4b-4659-8849-6aca54139d8e",
        SYSTEM_USER = "SystemUser" => "9f71bb34-9691-440f-8249-9c831ea16d58",
    }
}
