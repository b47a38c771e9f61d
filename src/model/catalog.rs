//! Fixed sample catalog shown on the member offers page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    Descuento,
    Evento,
    Novedad,
}

impl CatalogKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Descuento => "Descuento",
            Self::Evento => "Evento",
            Self::Novedad => "Novedad",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub kind: CatalogKind,
    pub category: &'static str,
    /// Event date as displayed, `dd/mm/yyyy`
    pub date: Option<&'static str>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
}

impl CatalogItem {
    /// Whole percentage saved against the original price, if there is one
    pub fn discount_percent(&self) -> Option<u32> {
        let (price, original) = (self.price?, self.original_price?);
        if original <= 0.0 || price >= original {
            return None;
        }

        Some(((1.0 - price / original) * 100.0).round() as u32)
    }
}

macro_rules! unsplash {
    ($id:literal) => {
        concat!(
            "https://images.unsplash.com/",
            $id,
            "?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D"
        )
    };
}

pub static SAMPLE_CATALOG: [CatalogItem; 10] = [
    CatalogItem {
        id: 1,
        title: "20% de Descuento en Frutas Frescas",
        description: "Disfruta de un 20% de descuento en todas las frutas de temporada. ¡Frescura garantizada para tu mesa!",
        image: "https://4tsix0yujj.ufs.sh/f/2vMRHqOYUHc0g2GpY7ByGbrS9nEWZQlfP5u0qJcMdT1UxIvR",
        kind: CatalogKind::Descuento,
        category: "Alimentos",
        date: None,
        price: Some(8.50),
        original_price: Some(10.62),
    },
    CatalogItem {
        id: 2,
        title: "Noche de Degustación de Quesos Artesanales",
        description: "Únete a nuestra exclusiva noche de degustación. Prueba los mejores quesos artesanales maridados con vinos selectos.",
        image: unsplash!("photo-1586201375761-8386500d392d"),
        kind: CatalogKind::Evento,
        category: "Eventos",
        date: Some("25/03/2025"),
        price: Some(35.00),
        original_price: None,
    },
    CatalogItem {
        id: 3,
        title: "Nuevos Productos Orgánicos en Tienda",
        description: "Descubre nuestra nueva línea de productos orgánicos certificados. ¡Alimenta tu cuerpo de forma natural!",
        image: unsplash!("photo-1542838132-92570297319a"),
        kind: CatalogKind::Novedad,
        category: "Alimentos",
        date: None,
        price: Some(12.75),
        original_price: None,
    },
    CatalogItem {
        id: 4,
        title: "30% en Carnes Premium",
        description: "Oferta especial en cortes de carne premium. ¡Perfecto para tu próxima parrillada!",
        image: unsplash!("photo-1628272949891-30700b2c7541"),
        kind: CatalogKind::Descuento,
        category: "Alimentos",
        date: None,
        price: Some(25.99),
        original_price: Some(37.13),
    },
    CatalogItem {
        id: 5,
        title: "Clase de Cocina Saludable con Chef Invitado",
        description: "Aprende a preparar platos deliciosos y nutritivos con nuestro chef invitado. ¡Cupos limitados!",
        image: unsplash!("photo-1576595580341-f3e35629517e"),
        kind: CatalogKind::Evento,
        category: "Eventos",
        date: Some("10/04/2025"),
        price: Some(50.00),
        original_price: None,
    },
    CatalogItem {
        id: 6,
        title: "Lanzamiento: Panadería Artesanal",
        description: "Descubre el sabor auténtico de nuestro pan recién horneado, hecho con masa madre y los mejores ingredientes.",
        image: unsplash!("photo-1583339752135-c77290770667"),
        kind: CatalogKind::Novedad,
        category: "Alimentos",
        date: None,
        price: Some(6.25),
        original_price: None,
    },
    CatalogItem {
        id: 7,
        title: "Descuento en Productos de Limpieza Ecológicos",
        description: "Cuida tu hogar y el planeta con un 15% de descuento en nuestra línea de limpieza ecológica.",
        image: unsplash!("photo-1581578731548-adab68c07897"),
        kind: CatalogKind::Descuento,
        category: "Hogar",
        date: None,
        price: Some(15.00),
        original_price: Some(17.65),
    },
    CatalogItem {
        id: 8,
        title: "Taller de Huertos Urbanos",
        description: "Aprende a cultivar tus propias verduras en casa. ¡Un evento para toda la familia!",
        image: unsplash!("photo-1533035353720-f1c6a7b759d9"),
        kind: CatalogKind::Evento,
        category: "Eventos",
        date: Some("05/05/2025"),
        price: Some(20.00),
        original_price: None,
    },
    CatalogItem {
        id: 9,
        title: "Café Orgánico de Origen Único",
        description: "Disfruta de nuestro nuevo café orgánico, cultivado en las montañas de Colombia. Aroma y sabor inigualables.",
        image: unsplash!("photo-1511920170104-dr286c4408f6"),
        kind: CatalogKind::Novedad,
        category: "Bebidas",
        date: None,
        price: Some(9.99),
        original_price: None,
    },
    CatalogItem {
        id: 10,
        title: "Cesta de Productos Gourmet",
        description: "Una selección de los mejores productos gourmet para regalar o disfrutar en casa. Edición limitada.",
        image: unsplash!("photo-1550989460-0adf9bb60d13"),
        kind: CatalogKind::Descuento,
        category: "Regalos",
        date: None,
        price: Some(75.00),
        original_price: Some(90.00),
    },
];
