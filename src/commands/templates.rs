use rpassgen::templates::TEMPLATES;

pub fn list_templates() -> Result<(), String> {
    println!("{:<10} | {:<10} | {:<6} | {:<36} | {}", "Key", "Name", "Length", "Classes", "Description");
    println!("{}", "-".repeat(110));
    for template in TEMPLATES.iter() {
        let classes = template
            .config
            .enabled_classes()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",");
        println!("{:<10} | {:<10} | {:<6} | {:<36} | {}",
                 template.key, template.name, template.config.length, classes, template.description);
    }
    Ok(())
}
