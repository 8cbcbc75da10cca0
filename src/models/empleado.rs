use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identificador de empleado
///
/// El backend lo ha servido como número o como texto según la versión,
/// así que se aceptan ambos.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Debug)]
#[serde(untagged)]
pub enum EmpleadoId {
    Numero(i64),
    Texto(String),
}

// Cualquier número JSON es un id válido: enteros fuera de i64 o con
// decimales se conservan como texto para no romper la lista entera.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdCrudo {
    Entero(i64),
    Grande(u64),
    Real(f64),
    Texto(String),
}

// Mayor entero que un f64 representa sin pérdida (2^53)
const MAX_ENTERO_EXACTO: f64 = 9_007_199_254_740_992.0;

impl From<IdCrudo> for EmpleadoId {
    fn from(crudo: IdCrudo) -> Self {
        match crudo {
            IdCrudo::Entero(n) => EmpleadoId::Numero(n),
            IdCrudo::Grande(n) => EmpleadoId::Texto(n.to_string()),
            IdCrudo::Real(f) if f.fract() == 0.0 && f.abs() <= MAX_ENTERO_EXACTO => {
                EmpleadoId::Numero(f as i64)
            }
            IdCrudo::Real(f) => EmpleadoId::Texto(f.to_string()),
            IdCrudo::Texto(s) => EmpleadoId::Texto(s),
        }
    }
}

impl<'de> Deserialize<'de> for EmpleadoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IdCrudo::deserialize(deserializer).map(EmpleadoId::from)
    }
}

impl EmpleadoId {
    fn is_blank(&self) -> bool {
        matches!(self, EmpleadoId::Texto(s) if s.trim().is_empty())
    }
}

impl fmt::Display for EmpleadoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmpleadoId::Numero(n) => write!(f, "{}", n),
            EmpleadoId::Texto(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EmpleadoId {
    fn from(n: i64) -> Self {
        EmpleadoId::Numero(n)
    }
}

impl From<&str> for EmpleadoId {
    fn from(s: &str) -> Self {
        EmpleadoId::Texto(s.to_string())
    }
}

/// Campos editables desde el diálogo
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Campo {
    Nombre,
    Direccion,
    Telefono,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Empleado {
    // None = todavía no persistido
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "id_opcional")]
    pub id: Option<EmpleadoId>,
    #[serde(default, deserialize_with = "texto_o_vacio")]
    pub nombre: String,
    #[serde(default, deserialize_with = "texto_o_vacio")]
    pub direccion: String,
    #[serde(default, deserialize_with = "texto_o_vacio")]
    pub telefono: String,
}

impl Empleado {
    /// Borrador vacío para el diálogo de alta
    pub fn nuevo() -> Self {
        Self::default()
    }

    pub fn es_nuevo(&self) -> bool {
        self.id.is_none()
    }

    /// Identidad de fila para la selección: por id si ambas lo tienen,
    /// por contenido completo si alguna llegó sin id
    pub fn misma_fila(&self, otra: &Empleado) -> bool {
        match (&self.id, &otra.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self == otra,
            _ => false,
        }
    }

    /// Solo se puede guardar con un nombre no vacío
    pub fn tiene_nombre_valido(&self) -> bool {
        !self.nombre.trim().is_empty()
    }

    pub fn campo(&self, campo: Campo) -> &str {
        match campo {
            Campo::Nombre => &self.nombre,
            Campo::Direccion => &self.direccion,
            Campo::Telefono => &self.telefono,
        }
    }

    pub fn set_campo(&mut self, campo: Campo, valor: String) {
        match campo {
            Campo::Nombre => self.nombre = valor,
            Campo::Direccion => self.direccion = valor,
            Campo::Telefono => self.telefono = valor,
        }
    }

    /// Filtro global "contains", sin distinguir mayúsculas, sobre todas las columnas
    pub fn coincide_con(&self, filtro: &str) -> bool {
        if filtro.is_empty() {
            return true;
        }
        let filtro = filtro.to_lowercase();
        let id = self.id.as_ref().map(|id| id.to_string()).unwrap_or_default();

        [id.as_str(), self.nombre.as_str(), self.direccion.as_str(), self.telefono.as_str()]
            .iter()
            .any(|valor| valor.to_lowercase().contains(&filtro))
    }
}

fn id_opcional<'de, D>(deserializer: D) -> Result<Option<EmpleadoId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<EmpleadoId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.is_blank()))
}

fn texto_o_vacio<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empleado(id: i64, nombre: &str) -> Empleado {
        Empleado {
            id: Some(EmpleadoId::Numero(id)),
            nombre: nombre.to_string(),
            direccion: "Calle Mayor 1".to_string(),
            telefono: "600123123".to_string(),
        }
    }

    #[test]
    fn acepta_id_numerico_y_texto() {
        let numerico: Empleado =
            serde_json::from_str(r#"{"id":7,"nombre":"Ana","direccion":"X","telefono":"1"}"#).unwrap();
        assert_eq!(numerico.id, Some(EmpleadoId::Numero(7)));

        let texto: Empleado =
            serde_json::from_str(r#"{"id":"abc-1","nombre":"Ana","direccion":"X","telefono":"1"}"#).unwrap();
        assert_eq!(texto.id, Some(EmpleadoId::Texto("abc-1".to_string())));
    }

    #[test]
    fn id_vacio_o_nulo_es_nuevo() {
        let vacio: Empleado = serde_json::from_str(r#"{"id":"","nombre":"Ana"}"#).unwrap();
        assert!(vacio.es_nuevo());

        let nulo: Empleado = serde_json::from_str(r#"{"id":null,"nombre":null}"#).unwrap();
        assert!(nulo.es_nuevo());
        assert_eq!(nulo.nombre, "");
        assert_eq!(nulo.direccion, "");
    }

    #[test]
    fn borrador_no_serializa_id() {
        let borrador = Empleado {
            nombre: "Ana".to_string(),
            ..Empleado::nuevo()
        };
        let json = serde_json::to_value(&borrador).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["nombre"], "Ana");

        let json = serde_json::to_value(empleado(3, "Luis")).unwrap();
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn nombre_en_blanco_no_es_valido() {
        let mut e = Empleado::nuevo();
        assert!(!e.tiene_nombre_valido());
        e.nombre = "   ".to_string();
        assert!(!e.tiene_nombre_valido());
        e.nombre = " Ana ".to_string();
        assert!(e.tiene_nombre_valido());
    }

    #[test]
    fn filtro_global_contains_sin_mayusculas() {
        let e = empleado(42, "María López");
        assert!(e.coincide_con(""));
        assert!(e.coincide_con("maría"));
        assert!(e.coincide_con("MAYOR"));
        assert!(e.coincide_con("123"));
        assert!(e.coincide_con("42"));
        assert!(!e.coincide_con("pedro"));
    }

    #[test]
    fn set_campo_actualiza_el_campo_indicado() {
        let mut e = Empleado::nuevo();
        e.set_campo(Campo::Telefono, "911".to_string());
        assert_eq!(e.campo(Campo::Telefono), "911");
        assert_eq!(e.campo(Campo::Nombre), "");
    }

    #[test]
    fn ids_decimales_o_enormes_no_rompen_la_lista() {
        let lista: Vec<Empleado> = serde_json::from_str(
            r#"[{"id":1.0,"nombre":"Ana"},{"id":18446744073709551615,"nombre":"Luis"},{"id":2.5,"nombre":"Eva"}]"#,
        )
        .unwrap();
        let ids: Vec<Option<EmpleadoId>> = lista.into_iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                Some(EmpleadoId::Numero(1)),
                Some(EmpleadoId::from("18446744073709551615")),
                Some(EmpleadoId::from("2.5")),
            ]
        );
    }

    #[test]
    fn filas_sin_id_se_distinguen_por_contenido() {
        let lista: Vec<Empleado> =
            serde_json::from_str(r#"[{"id":"","nombre":"Ana"},{"id":null,"nombre":"Luis"}]"#).unwrap();
        assert!(lista[0].misma_fila(&lista[0].clone()));
        assert!(!lista[0].misma_fila(&lista[1]));

        // Con id, la identidad no depende del resto de campos
        assert!(empleado(1, "Ana").misma_fila(&empleado(1, "Ana María")));
        assert!(!empleado(1, "Ana").misma_fila(&lista[0]));
    }

    #[test]
    fn id_display() {
        assert_eq!(EmpleadoId::from(5).to_string(), "5");
        assert_eq!(EmpleadoId::from("x-9").to_string(), "x-9");
    }
}
