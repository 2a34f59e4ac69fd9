/// Resume document, served from `PUBLIC_DIR`.
pub const RESUME_HREF: &str = "/Asad_Khan_Resume.pdf";
pub const LINKEDIN_HREF: &str = "https://www.linkedin.com/in/asad-toronto89";
pub const EMAIL_HREF: &str = "mailto:khan.asad09@gmail.com";
