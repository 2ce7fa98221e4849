// SPDX-License-Identifier: PMPL-1.0-or-later

//! Gallery index scanning and catalog enrichment from files

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vizfolio::catalog::Catalog;
use vizfolio::config::SiteConfig;
use vizfolio::gallery::GalleryIndex;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"img").unwrap();
}

#[test]
fn test_scan_pairs_originals_with_thumbnails() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("haus/02-salon.jpg"));
    touch(&root.join("haus/01-fachada.jpg"));
    touch(&root.join("haus/thumbnails/01-fachada.jpg"));
    touch(&root.join("haus/notes.txt"));
    touch(&root.join("meat-frisbee/barra.webp"));
    fs::create_dir_all(root.join("empty-project")).unwrap();

    let index = GalleryIndex::scan(root, "/projects/").expect("scan should succeed");
    assert!(index.generated_at.is_some());
    assert_eq!(index.len(), 2, "directories without images are skipped");

    let haus = index.lookup("haus");
    assert_eq!(haus.len(), 2);
    assert_eq!(haus[0].original, "/projects/haus/01-fachada.jpg");
    assert_eq!(haus[0].thumbnail, "/projects/haus/thumbnails/01-fachada.jpg");
    // No thumbnail on disk: the original doubles as thumbnail
    assert_eq!(haus[1].original, "/projects/haus/02-salon.jpg");
    assert_eq!(haus[1].thumbnail, haus[1].original);

    assert_eq!(index.lookup("meat-frisbee").len(), 1);
    assert!(index.lookup("empty-project").is_empty());
}

#[test]
fn test_scan_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    assert!(GalleryIndex::scan(&dir.path().join("nope"), "/projects").is_err());
}

#[test]
fn test_saved_index_loads_back_into_catalog() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("assets/casa-fenix/patio.png"));
    let index = GalleryIndex::scan(&dir.path().join("assets"), "/img").unwrap();

    let index_path = dir.path().join("out/gallery.yaml");
    index.save(&index_path).unwrap();
    let loaded = GalleryIndex::load(&index_path).unwrap();
    assert_eq!(loaded, index);

    let catalog = Catalog::builtin().with_gallery(&loaded);
    let casa = catalog.find_by_slug("casa-fenix").unwrap();
    assert_eq!(casa.cover().unwrap().original, "/img/casa-fenix/patio.png");
    assert!(catalog.find_by_slug("haus").unwrap().gallery.is_empty());
}

#[test]
fn test_catalog_file_with_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("projects.yaml"),
        r#"
- id: a1
  title: Torre Mirador
  location: Alicante
  client: Mirador S.A.
  date: "2024"
  role: Visualización Arquitectónica
  buildingType: Residencial
  featured: true
- id: a2
  slug: nave-9
  title: Nave Nueve
  location: Elche
  client: Calzados Sur
  date: "2023"
  role: Proyecto y Dirección de Obra
  building_type: Industrial
  tags: [calzado]
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("gallery.json"),
        r#"{"torre-mirador": [{"original": "/p/t/1.jpg", "thumbnail": "/p/t/t1.jpg"}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("site.json"),
        r#"{"catalog": "projects.yaml", "gallery": "gallery.json"}"#,
    )
    .unwrap();

    let config = SiteConfig::load(&dir.path().join("site.json")).unwrap();
    let catalog = config.catalog().expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.projects()[0].slug, "torre-mirador");
    assert_eq!(catalog.projects()[0].gallery.len(), 1);
    assert_eq!(catalog.find_by_slug("nave-9").unwrap().title, "Nave Nueve");
    assert_eq!(catalog.featured().len(), 1);
}

#[test]
fn test_catalog_rejects_unknown_facet_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[{"id": "x", "title": "X", "location": "L", "client": "C",
             "date": "2019", "role": "Diseño de Interiores", "buildingType": "Comercial"}]"#,
    )
    .unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parsing json project catalog"));
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[
          {"id": "x", "title": "Uno", "location": "L", "client": "C",
           "date": "2024", "role": "Diseño de Interiores", "buildingType": "Comercial"},
          {"id": "x", "title": "Dos", "location": "L", "client": "C",
           "date": "2024", "role": "Diseño de Interiores", "buildingType": "Comercial"}
        ]"#,
    )
    .unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate project id"));
}

#[test]
fn test_catalog_rejects_non_canonical_slug() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[
          {"id": "p1", "slug": "Casa Fénix / 2", "title": "Casa Fénix", "location": "Ávila",
           "client": "C", "date": "2025", "role": "Diseño de Interiores",
           "buildingType": "Residencial"}
        ]"#,
    )
    .unwrap();
    let err = Catalog::load(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("not URL-safe"), "{}", message);
    assert!(message.contains("casa-fenix-2"), "{}", message);

    fs::write(
        &path,
        r#"[
          {"id": "p1", "slug": "casa-fenix-2", "title": "Casa Fénix", "location": "Ávila",
           "client": "C", "date": "2025", "role": "Diseño de Interiores",
           "buildingType": "Residencial"}
        ]"#,
    )
    .unwrap();
    let catalog = Catalog::load(&path).unwrap();
    assert!(catalog.find_by_slug("casa-fenix-2").is_some());
}
